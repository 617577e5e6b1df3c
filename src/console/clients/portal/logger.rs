use std::cell::RefCell;

use super::printer::Printer;

/// Captures everything printed so it can be inspected later. Standard output
/// and standard error are kept apart.
pub struct Logger {
    output: RefCell<String>,
    errors: RefCell<String>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: RefCell::new(String::new()),
            errors: RefCell::new(String::new()),
        }
    }

    #[must_use]
    pub fn log(&self) -> String {
        self.output.borrow().clone()
    }

    #[must_use]
    pub fn error_log(&self) -> String {
        self.errors.borrow().clone()
    }
}

impl Printer for Logger {
    fn print(&self, output: &str) {
        self.output.borrow_mut().push_str(output);
    }

    fn eprint(&self, output: &str) {
        self.errors.borrow_mut().push_str(output);
    }

    fn println(&self, output: &str) {
        self.print(&format!("{output}\n"));
    }

    fn eprintln(&self, output: &str) {
        self.eprint(&format!("{output}\n"));
    }
}
