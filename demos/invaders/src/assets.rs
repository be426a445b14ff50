//! Sprite sheets embedded as PNG bytes and decoded at startup.
//!
//! The invader sheets are two animation frames stacked vertically
//! (eclipse/crab 24x32, squid 16x32); the cannon is a single 32x32 frame.

pub const ECLIPSE_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x20,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x08, 0x5E, 0xB8, 0x38, 0x00, 0x00, 0x00,
    0x01, 0x73, 0x52, 0x47, 0x42, 0x00, 0xAE, 0xCE, 0x1C, 0xE9, 0x00, 0x00,
    0x00, 0xB3, 0x49, 0x44, 0x41, 0x54, 0x48, 0x4B, 0xED, 0x96, 0x4B, 0x0E,
    0x80, 0x30, 0x08, 0x44, 0xE5, 0xFE, 0x87, 0xC6, 0xB8, 0x28, 0x0B, 0x08,
    0x7D, 0x62, 0x8A, 0x4D, 0x8C, 0x2E, 0x9D, 0x66, 0x86, 0xA1, 0x7C, 0x2A,
    0x07, 0x7C, 0xAA, 0xAA, 0xB3, 0x23, 0x22, 0x22, 0x53, 0xFC, 0x35, 0x01,
    0x8A, 0x94, 0x02, 0xF1, 0xF8, 0x70, 0x66, 0xF6, 0xDA, 0x04, 0x56, 0x13,
    0x07, 0x27, 0xDB, 0x04, 0x7C, 0x75, 0xF8, 0x40, 0x08, 0x1F, 0x4E, 0x24,
    0x73, 0x40, 0x04, 0x84, 0xA3, 0x40, 0xB5, 0x6A, 0xB2, 0xF3, 0xA9, 0x83,
    0x65, 0x02, 0x19, 0x51, 0x35, 0xE7, 0x59, 0x47, 0xA7, 0x6D, 0xDE, 0x26,
    0x90, 0x11, 0x57, 0xFF, 0xDB, 0x25, 0xFB, 0x14, 0x55, 0x89, 0xC8, 0x69,
    0xB8, 0x64, 0x9A, 0x8E, 0x74, 0xF9, 0x41, 0x90, 0x22, 0x20, 0x42, 0xCC,
    0x00, 0x11, 0xD0, 0x28, 0x21, 0xC7, 0xD3, 0x65, 0x71, 0x89, 0x2F, 0x13,
    0x20, 0x22, 0x72, 0xFA, 0xEF, 0x83, 0x6A, 0x86, 0xEC, 0xFC, 0xBE, 0x71,
    0x4D, 0xF3, 0x9E, 0xF0, 0x0F, 0xEF, 0x83, 0xA7, 0x2B, 0xD4, 0x52, 0xE2,
    0x5E, 0x7A, 0xA1, 0x93, 0xDB, 0x04, 0x68, 0xE8, 0x3D, 0xC5, 0xD3, 0x97,
    0x1D, 0x55, 0xC9, 0x5D, 0x1C, 0x53, 0x44, 0xD3, 0x92, 0x9C, 0xB5, 0x0B,
    0x9C, 0x01, 0xDA, 0xDF, 0xE9, 0xF3, 0x25, 0x54, 0xA2, 0x00, 0x00, 0x00,
    0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

pub const CRAB_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x20,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x08, 0x5E, 0xB8, 0x38, 0x00, 0x00, 0x00,
    0x01, 0x73, 0x52, 0x47, 0x42, 0x00, 0xAE, 0xCE, 0x1C, 0xE9, 0x00, 0x00,
    0x00, 0xD9, 0x49, 0x44, 0x41, 0x54, 0x48, 0x4B, 0xCD, 0x56, 0x51, 0x0E,
    0x85, 0x30, 0x08, 0x93, 0xFB, 0x1F, 0x7A, 0x2F, 0x9A, 0xCC, 0x20, 0x16,
    0xDA, 0xA7, 0x6E, 0xEA, 0xA7, 0x1B, 0x14, 0x0A, 0x94, 0xD9, 0x02, 0xBE,
    0xD6, 0x5A, 0x5B, 0x7F, 0x9B, 0x99, 0xA1, 0xF3, 0xF8, 0xAF, 0xBA, 0x0F,
    0x1D, 0x0C, 0x07, 0xE8, 0x11, 0x32, 0x20, 0x76, 0xBE, 0xB1, 0x50, 0x51,
    0xC0, 0x1C, 0xB0, 0xF3, 0x14, 0xA0, 0x1B, 0x2A, 0xFC, 0xFB, 0x3B, 0xA8,
    0x66, 0x65, 0x0D, 0x1E, 0x07, 0x88, 0x91, 0xF7, 0x88, 0xB2, 0x8C, 0xB2,
    0x73, 0x9F, 0xC9, 0x21, 0x83, 0x61, 0x00, 0x57, 0x39, 0x67, 0x14, 0xAE,
    0x99, 0x6C, 0x19, 0x4C, 0x03, 0xB8, 0x0B, 0x18, 0xED, 0x4F, 0x19, 0x4C,
    0x07, 0xB8, 0xAA, 0x45, 0x7E, 0x00, 0x0F, 0x35, 0x40, 0x29, 0xB2, 0x42,
    0xFA, 0x1A, 0xA6, 0x14, 0x65, 0x4E, 0xD4, 0xB6, 0xAD, 0x32, 0x95, 0xB4,
    0xA8, 0x07, 0xA0, 0x0C, 0x56, 0x0C, 0xF6, 0x1D, 0xB9, 0x56, 0x54, 0xD2,
    0x47, 0x4A, 0x17, 0x4E, 0x76, 0x81, 0x01, 0x29, 0x76, 0xB0, 0x8B, 0xEE,
    0x2E, 0x1C, 0xB9, 0x4D, 0x95, 0x16, 0x45, 0xFB, 0xE0, 0x3D, 0x80, 0x53,
    0x8B, 0x11, 0x31, 0x64, 0xD2, 0x42, 0xD5, 0x54, 0x71, 0x50, 0xA9, 0x31,
    0x05, 0xF8, 0xB7, 0x06, 0x88, 0x81, 0x39, 0xFB, 0x20, 0xB6, 0xE5, 0x13,
    0x91, 0xEF, 0xF2, 0x82, 0x26, 0x72, 0x18, 0x80, 0x3A, 0x60, 0xDF, 0x7D,
    0x9B, 0x32, 0xED, 0x61, 0xD4, 0x21, 0x7B, 0xF8, 0x2E, 0x52, 0x57, 0xA5,
    0x42, 0xD5, 0x0F, 0xC4, 0x48, 0x20, 0x30, 0x2A, 0x53, 0xE6, 0x47, 0x00,
    0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

pub const SQUID_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x20,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1B, 0x89, 0xF8, 0xCC, 0x00, 0x00, 0x00,
    0x01, 0x73, 0x52, 0x47, 0x42, 0x00, 0xAE, 0xCE, 0x1C, 0xE9, 0x00, 0x00,
    0x00, 0x96, 0x49, 0x44, 0x41, 0x54, 0x48, 0x4B, 0xED, 0x94, 0x51, 0x0E,
    0xC0, 0x20, 0x08, 0x43, 0xE5, 0xFE, 0x87, 0x66, 0x59, 0x32, 0xCC, 0x52,
    0x6C, 0x8A, 0xF2, 0xB7, 0x6C, 0x9F, 0x0A, 0x8F, 0xD2, 0x09, 0x36, 0xC8,
    0xE7, 0xEE, 0xFE, 0xBE, 0x32, 0x33, 0x5B, 0x85, 0x2E, 0x0F, 0xEF, 0xC0,
    0x63, 0x00, 0x26, 0x62, 0x55, 0x54, 0x92, 0x14, 0x1C, 0x03, 0x54, 0x22,
    0x53, 0x32, 0x15, 0x1C, 0x03, 0x98, 0x59, 0xE5, 0xF3, 0x72, 0xE0, 0xF3,
    0x1B, 0x53, 0x3C, 0x93, 0x8E, 0x6E, 0xD3, 0xB8, 0x36, 0x00, 0xDD, 0x0D,
    0x20, 0x53, 0x50, 0x7E, 0x07, 0xDB, 0x00, 0xAC, 0xAC, 0xCC, 0x8D, 0x02,
    0xE9, 0x1D, 0xC4, 0x45, 0x19, 0xC0, 0x2A, 0xAB, 0x16, 0x66, 0x5E, 0x1B,
    0xF0, 0xEF, 0x83, 0xD1, 0x1F, 0xE7, 0x30, 0xF1, 0x83, 0xFB, 0x80, 0xBD,
    0x8F, 0xB4, 0x1B, 0x77, 0x7B, 0x4F, 0x00, 0x34, 0x71, 0x7B, 0x98, 0xDA,
    0x00, 0xB6, 0x81, 0x94, 0x07, 0x74, 0x1A, 0x55, 0x62, 0x52, 0xCC, 0x5A,
    0x50, 0x53, 0x2A, 0x37, 0x52, 0x15, 0x70, 0x01, 0x59, 0x5D, 0xF7, 0xF1,
    0xB4, 0x79, 0xD8, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44,
    0xAE, 0x42, 0x60, 0x82,
];

pub const CANNON_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x20,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x73, 0x7A, 0x7A, 0xF4, 0x00, 0x00, 0x00,
    0x01, 0x73, 0x52, 0x47, 0x42, 0x00, 0xAE, 0xCE, 0x1C, 0xE9, 0x00, 0x00,
    0x00, 0x6F, 0x49, 0x44, 0x41, 0x54, 0x58, 0x47, 0x63, 0x64, 0x18, 0x60,
    0xC0, 0x38, 0xC0, 0xF6, 0x33, 0x8C, 0x3A, 0x80, 0xEC, 0x10, 0xF0, 0xBC,
    0x28, 0xF5, 0x1F, 0x39, 0xFA, 0xB6, 0xEB, 0x3F, 0x23, 0xCB, 0x2C, 0xB2,
    0x34, 0x81, 0x2C, 0x1E, 0x75, 0xC0, 0x80, 0x85, 0x00, 0xBA, 0xC5, 0xE8,
    0xD9, 0x98, 0xD4, 0xB4, 0x40, 0x72, 0x1A, 0x18, 0x75, 0xC0, 0x68, 0x08,
    0x8C, 0x86, 0x00, 0xCD, 0x43, 0x80, 0x90, 0x05, 0x94, 0x56, 0xDF, 0xE8,
    0xE5, 0x04, 0x46, 0x39, 0x30, 0x60, 0x0E, 0xA0, 0xB5, 0xC5, 0xB8, 0x4A,
    0x4C, 0x78, 0x08, 0x0C, 0x98, 0x03, 0xE8, 0x6D, 0x31, 0x7A, 0x48, 0x30,
    0x8E, 0x3A, 0x60, 0x34, 0x04, 0x46, 0x43, 0x60, 0x34, 0x04, 0x46, 0x43,
    0x60, 0xA0, 0x43, 0x00, 0x00, 0x7D, 0xC2, 0x5A, 0x85, 0xA1, 0x37, 0xE6,
    0xE4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60,
    0x82, 0x00, 0x00,
];
