use std::cell::{RefCell, RefMut};

/// Top-level handle a command invocation runs against. Owns the output
/// writer so command implementations stay testable against any sink.
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Session {
    pub fn new(writer: Box<dyn std::io::Write>) -> Self {
        Session {
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
