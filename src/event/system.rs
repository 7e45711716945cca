//! Event system: kumpulan events yang di-serialize sebagai satu Object tree.

use tracing::debug;

use super::device::{Event, Populate};
use crate::core::Result;
use crate::protocol::{serialize, Object, Primitive};

const DEFAULT_DESCRIPTOR: i32 = 123;
const DEFAULT_INDEX: i16 = 1;

#[derive(Debug)]
pub struct System {
    name: String,
    descriptor: i32,
    index: i16,
    active: bool,
    events: Vec<Box<dyn Event>>,
}

impl System {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptor: DEFAULT_DESCRIPTOR,
            index: DEFAULT_INDEX,
            active: true,
            events: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_event<E: Event + 'static>(&mut self, event: E) {
        self.events.push(Box::new(event));
    }

    pub fn first_event(&self) -> Option<&dyn Event> {
        self.events.first().map(|e| e.as_ref())
    }

    pub fn events(&self) -> impl Iterator<Item = &dyn Event> {
        self.events.iter().map(|e| e.as_ref())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Bangun Object tree: field system, lalu satu child Object per event.
    pub fn to_object(&self) -> Result<Object> {
        let mut root = Object::new(self.name.as_str())?;
        root.add_entity(Primitive::create("descriptor", self.descriptor)?)?;
        root.add_entity(Primitive::create("index", self.index)?)?;
        root.add_entity(Primitive::create("active", self.active)?)?;

        for event in &self.events {
            let mut child = Object::new(event.device_type().to_string())?;
            event.populate(&mut child)?;
            root.add_entity(child)?;
        }

        Ok(root)
    }

    pub fn serialize(&self) -> Result<Vec<u8>> {
        let root = self.to_object()?;
        debug!(system = %self.name, events = self.events.len(), "serializing system");
        serialize(&root)
    }
}
