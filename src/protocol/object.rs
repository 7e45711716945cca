//! Object: composite node yang memiliki child nodes secara eksklusif.
//!
//! `size` dihitung dari header + child sizes yang sudah diketahui saat
//! `add_entity`; children tidak bisa dimutasi setelah ditambahkan, jadi
//! angka ini tidak pernah basi.

use tracing::{debug, trace};

use super::node::{checked_pack, record_size, Header, Node, Pack};
use super::tags::{Wrapper, MAX_OBJECT_COUNT, OBJECT_COUNT_SIZE};
use crate::core::{Encoder, Error, Result};

#[derive(Debug, Clone)]
pub struct Object {
    header: Header,
    children: Vec<Node>,
    size: usize,
}

impl Object {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let header = Header::new(name.into(), Wrapper::Object)?;
        let size = record_size(&[header.fixed_len(), OBJECT_COUNT_SIZE])?;

        Ok(Self {
            header,
            children: Vec::new(),
            size,
        })
    }

    /// Tambah child di akhir urutan.
    ///
    /// Object mengambil ownership child, jadi satu node tidak bisa punya dua
    /// parent.
    pub fn add_entity(&mut self, child: impl Into<Node>) -> Result<()> {
        let child = child.into();

        if self.children.len() >= MAX_OBJECT_COUNT {
            return Err(Error::TooManyEntries {
                count: self.children.len() + 1,
                max: MAX_OBJECT_COUNT,
            });
        }
        let size = record_size(&[self.size, child.size()])?;

        debug!(
            object = self.header.name(),
            child = child.name(),
            child_size = child.size(),
            size,
            "entity added"
        );

        self.children.push(child);
        self.size = size;
        Ok(())
    }

    /// Child pertama dengan nama persis `name` (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name() == name)
    }

    #[inline(always)]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline(always)]
    pub fn count(&self) -> usize {
        self.children.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[inline(always)]
    pub fn name_length(&self) -> i16 {
        self.header.name_length()
    }

    #[inline(always)]
    pub fn wrapper(&self) -> Wrapper {
        self.header.wrapper()
    }
}

impl Pack for Object {
    fn name(&self) -> &str {
        self.header.name()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn pack(&self, encoder: &mut Encoder) -> Result<()> {
        trace!(node = self.name(), count = self.children.len(), size = self.size, "pack object");

        checked_pack(self.name(), self.size, encoder, |encoder| {
            self.header.write_lead(encoder)?;
            encoder.put(self.children.len() as i16)?;
            for child in &self.children {
                child.pack(encoder)?;
            }
            encoder.put(self.size as i32)
        })
    }
}
