//! Minimal executable headers for tests.

/// A 64-bit little-endian ELF executable header with no program or section
/// headers.
pub fn elf64(machine: u16) -> Vec<u8> {
    let mut bytes = vec![0u8; 64];
    bytes[0..4].copy_from_slice(b"\x7fELF");
    bytes[4] = 2; // ELFCLASS64
    bytes[5] = 1; // ELFDATA2LSB
    bytes[6] = 1; // EV_CURRENT
    bytes[16..18].copy_from_slice(&2u16.to_le_bytes()); // ET_EXEC
    bytes[18..20].copy_from_slice(&machine.to_le_bytes());
    bytes[20..24].copy_from_slice(&1u32.to_le_bytes());
    bytes[52..54].copy_from_slice(&64u16.to_le_bytes()); // e_ehsize
    bytes[54..56].copy_from_slice(&56u16.to_le_bytes()); // e_phentsize
    bytes[58..60].copy_from_slice(&64u16.to_le_bytes()); // e_shentsize
    bytes
}

/// A 64-bit little-endian Mach-O executable header with no load commands.
pub fn macho64(cputype: u32, cpusubtype: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(32);
    bytes.extend_from_slice(&0xfeed_facfu32.to_le_bytes()); // MH_MAGIC_64
    bytes.extend_from_slice(&cputype.to_le_bytes());
    bytes.extend_from_slice(&cpusubtype.to_le_bytes());
    bytes.extend_from_slice(&2u32.to_le_bytes()); // MH_EXECUTE
    bytes.extend_from_slice(&0u32.to_le_bytes()); // ncmds
    bytes.extend_from_slice(&0u32.to_le_bytes()); // sizeofcmds
    bytes.extend_from_slice(&0u32.to_le_bytes()); // flags
    bytes.extend_from_slice(&0u32.to_le_bytes()); // reserved
    bytes
}

/// A fat Mach-O header listing a single architecture.
pub fn macho_fat(cputype: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0xcafe_babeu32.to_be_bytes()); // FAT_MAGIC
    bytes.extend_from_slice(&1u32.to_be_bytes());
    bytes.extend_from_slice(&cputype.to_be_bytes());
    bytes.extend_from_slice(&0u32.to_be_bytes()); // cpusubtype
    bytes.extend_from_slice(&4096u32.to_be_bytes()); // offset
    bytes.extend_from_slice(&32u32.to_be_bytes()); // size
    bytes.extend_from_slice(&12u32.to_be_bytes()); // align
    bytes.resize(4096, 0);
    bytes.extend_from_slice(&macho64(cputype, 0));
    bytes
}

/// A PE image: DOS header, PE signature and COFF header, no optional header.
pub fn pe(machine: u16) -> Vec<u8> {
    const PE_OFFSET: usize = 0x80;

    let mut bytes = vec![0u8; 0x200];
    bytes[0..2].copy_from_slice(b"MZ");
    bytes[0x3c..0x40].copy_from_slice(&(PE_OFFSET as u32).to_le_bytes());
    bytes[PE_OFFSET..PE_OFFSET + 4].copy_from_slice(b"PE\0\0");

    let coff = PE_OFFSET + 4;
    bytes[coff..coff + 2].copy_from_slice(&machine.to_le_bytes());
    // number_of_sections, timestamp, symbol table and optional header size stay zero
    bytes[coff + 18..coff + 20].copy_from_slice(&0x0102u16.to_le_bytes()); // EXECUTABLE_IMAGE | 32BIT_MACHINE
    bytes
}
