//! In-memory ISO 9660 images for tests

use std::collections::BTreeMap;
use std::io::Cursor;

use super::filesystem::FileSystem;
use super::reader::{ImageReader, SECTOR_SIZE, SYSTEM_AREA_SIZE};

const RECORD_DATE: [u8; 7] = [124, 3, 9, 14, 5, 0, 0];
const FLAG_DIRECTORY: u8 = 0x02;

/// Builds a cooked image block by block
#[derive(Default)]
pub struct ImageBuilder {
    root_lba: u32,
    blocks: BTreeMap<u32, Vec<u8>>,
}

impl ImageBuilder {
    pub const ROOT_LBA: u32 = 20;
    pub const FOLDER_LBA: u32 = 21;
    pub const SUB_LBA: u32 = 22;
    pub const ROOT_FILE_LBA: u32 = 30;
    pub const FOLDER_FILE_LBA: u32 = 31;
    pub const DEEP_FILE_LBA: u32 = 32;

    pub const ROOT_FILE: &'static [u8] = b"hello root";
    pub const FOLDER_FILE: &'static [u8] = b"Hello from folder!";

    pub fn new(root_lba: u32) -> Self {
        Self {
            root_lba,
            blocks: BTreeMap::new(),
        }
    }

    /// Root holds FOLDER/ and MYFILE.TXT;1, FOLDER holds MYFILE.TXT;1 and SUB/,
    /// SUB holds DEEP.BIN;1 spanning three blocks.
    pub fn sample() -> Self {
        let mut builder = Self::new(Self::ROOT_LBA);
        builder
            .directory(
                Self::ROOT_LBA,
                Self::ROOT_LBA,
                &[
                    ("FOLDER", Self::FOLDER_LBA, SECTOR_SIZE as u32, FLAG_DIRECTORY),
                    ("MYFILE.TXT;1", Self::ROOT_FILE_LBA, Self::ROOT_FILE.len() as u32, 0),
                ],
            )
            .directory(
                Self::FOLDER_LBA,
                Self::ROOT_LBA,
                &[
                    ("MYFILE.TXT;1", Self::FOLDER_FILE_LBA, Self::FOLDER_FILE.len() as u32, 0),
                    ("SUB", Self::SUB_LBA, SECTOR_SIZE as u32, FLAG_DIRECTORY),
                ],
            )
            .directory(
                Self::SUB_LBA,
                Self::FOLDER_LBA,
                &[("DEEP.BIN;1", Self::DEEP_FILE_LBA, deep_content().len() as u32, 0)],
            )
            .raw(Self::ROOT_FILE_LBA, Self::ROOT_FILE)
            .raw(Self::FOLDER_FILE_LBA, Self::FOLDER_FILE)
            .raw(Self::DEEP_FILE_LBA, &deep_content());
        builder
    }

    /// Write a record list: ".", "..", then `entries` as
    /// (identifier, extent, size, flags)
    pub fn directory(&mut self, lba: u32, parent: u32, entries: &[(&str, u32, u32, u8)]) -> &mut Self {
        let mut data = directory_record(&[0], lba, SECTOR_SIZE as u32, FLAG_DIRECTORY);
        data.extend(directory_record(&[1], parent, SECTOR_SIZE as u32, FLAG_DIRECTORY));
        for (identifier, extent, size, flags) in entries {
            data.extend(directory_record(identifier.as_bytes(), *extent, *size, *flags));
        }
        assert!(data.len() <= SECTOR_SIZE as usize, "record list exceeds one block");
        self.raw(lba, &data)
    }

    /// Place arbitrary bytes at a block
    pub fn raw(&mut self, lba: u32, data: &[u8]) -> &mut Self {
        self.blocks.insert(lba, data.to_vec());
        self
    }

    pub fn volume_blocks(&self) -> u32 {
        let data_end = self
            .blocks
            .iter()
            .map(|(lba, data)| lba + (data.len() as u64).div_ceil(SECTOR_SIZE) as u32)
            .max()
            .unwrap_or(0);
        data_end.max(17)
    }

    pub fn build(&self) -> Vec<u8> {
        let mut image = vec![0u8; self.volume_blocks() as usize * SECTOR_SIZE as usize];
        let pvd = self.primary_descriptor();
        let start = SYSTEM_AREA_SIZE as usize;
        image[start..start + pvd.len()].copy_from_slice(&pvd);

        for (lba, data) in &self.blocks {
            let start = *lba as usize * SECTOR_SIZE as usize;
            image[start..start + data.len()].copy_from_slice(data);
        }
        image
    }

    /// Build the image and open it
    pub fn open(&self) -> FileSystem {
        let reader = ImageReader::new(Cursor::new(self.build()));
        FileSystem::from_reader(Box::new(reader)).unwrap()
    }

    fn primary_descriptor(&self) -> Vec<u8> {
        let mut pvd = vec![0u8; SECTOR_SIZE as usize];
        pvd[0] = 1;
        pvd[1..6].copy_from_slice(b"CD001");
        pvd[6] = 1;
        padded(&mut pvd[8..40], b"LINUX");
        padded(&mut pvd[40..72], b"TEST_VOLUME");
        both_endian_u32(&mut pvd[80..88], self.volume_blocks());
        both_endian_u16(&mut pvd[128..132], SECTOR_SIZE as u16);
        both_endian_u32(&mut pvd[132..140], 10);
        pvd[140..144].copy_from_slice(&18u32.to_le_bytes());

        let root = directory_record(&[0], self.root_lba, SECTOR_SIZE as u32, FLAG_DIRECTORY);
        pvd[156..190].copy_from_slice(&root);

        padded(&mut pvd[190..318], b"");
        padded(&mut pvd[318..446], b"ACME PUBLISHING");
        padded(&mut pvd[446..574], b"PREPARER");
        padded(&mut pvd[574..702], b"MKISOFS");
        pvd[813..829].copy_from_slice(b"2024030914050000");
        pvd
    }
}

/// Encode one directory record with its padding byte
pub fn directory_record(identifier: &[u8], extent: u32, size: u32, flags: u8) -> Vec<u8> {
    let padding = if identifier.len() % 2 == 0 { 1 } else { 0 };
    let length = 33 + identifier.len() + padding;

    let mut record = vec![0u8; length];
    record[0] = length as u8;
    both_endian_u32(&mut record[2..10], extent);
    both_endian_u32(&mut record[10..18], size);
    record[18..25].copy_from_slice(&RECORD_DATE);
    record[25] = flags;
    both_endian_u16(&mut record[28..32], 1);
    record[32] = identifier.len() as u8;
    record[33..33 + identifier.len()].copy_from_slice(identifier);
    record
}

/// Content of SUB/DEEP.BIN
pub fn deep_content() -> Vec<u8> {
    (0..5000u32).map(|i| (i % 251) as u8).collect()
}

fn padded(field: &mut [u8], text: &[u8]) {
    field.fill(b' ');
    field[..text.len()].copy_from_slice(text);
}

fn both_endian_u32(field: &mut [u8], value: u32) {
    field[..4].copy_from_slice(&value.to_le_bytes());
    field[4..8].copy_from_slice(&value.to_be_bytes());
}

fn both_endian_u16(field: &mut [u8], value: u16) {
    field[..2].copy_from_slice(&value.to_le_bytes());
    field[2..4].copy_from_slice(&value.to_be_bytes());
}
