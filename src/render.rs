use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::conversation::Role;

/// Opaque reference to a rendered entry.
///
/// Supports exactly one operation, handing it back to
/// [`Renderer::update`] to replace the entry's visible text. The session
/// uses this to turn the thinking placeholder into the final answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayHandle(usize);

/// Abstraction for the display surface messages are appended to.
///
/// Implementations may write to a terminal, a GUI panel or a buffer; the
/// session only cares that entries append in order, that an entry can later
/// be replaced in place, and that a detected user name can be surfaced
/// somewhere prominent.
///
/// # Example
///
/// ```
/// use parlour::{DisplayHandle, Renderer, Role};
///
/// struct Discard(usize);
///
/// impl Renderer for Discard {
///     fn render(&mut self, _role: Role, _text: &str) -> DisplayHandle {
///         self.0 += 1;
///         DisplayHandle::new(self.0 - 1)
///     }
///     fn update(&mut self, _handle: DisplayHandle, _text: &str) {}
/// }
/// ```
pub trait Renderer: Send {
    /// Append a new visible entry and return a handle to it.
    fn render(&mut self, role: Role, text: &str) -> DisplayHandle;

    /// Replace the visible text of a previously rendered entry.
    fn update(&mut self, handle: DisplayHandle, text: &str);

    /// Surface the detected user name. Optional; the default ignores it.
    fn set_title(&mut self, _name: &str) {}
}

impl DisplayHandle {
    /// Wrap an implementation-defined entry index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The wrapped entry index.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// [`Renderer`] that writes entries as `role> text` lines.
///
/// A scrollback terminal cannot rewrite an earlier line, so `update` prints
/// the replacement as the entry's final text. Write errors are ignored; a
/// broken stdout should not take the session down.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    roles: Vec<Role>,
}

impl ConsoleRenderer<io::Stdout> {
    /// Renderer over the process's stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// Renderer over an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            roles: Vec::new(),
        }
    }
}

impl<W: Write + Send> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, role: Role, text: &str) -> DisplayHandle {
        let _ = writeln!(self.out, "{role}> {text}");
        let _ = self.out.flush();
        self.roles.push(role);
        DisplayHandle(self.roles.len() - 1)
    }

    fn update(&mut self, handle: DisplayHandle, text: &str) {
        let role = self
            .roles
            .get(handle.0)
            .copied()
            .unwrap_or(Role::Assistant);
        let _ = writeln!(self.out, "{role}> {text}");
        let _ = self.out.flush();
    }

    fn set_title(&mut self, name: &str) {
        let _ = writeln!(self.out, "[chatting with {name}]");
        let _ = self.out.flush();
    }
}

/// [`Renderer`] that records entries for later inspection.
///
/// Primarily useful for tests where no real display surface exists. Clones
/// share the same backing log, so one copy can go into the session while the
/// test keeps another to assert on.
#[derive(Clone, Default)]
pub struct LoggingRenderer {
    entries: Arc<Mutex<Vec<(Role, String)>>>,
    title: Arc<Mutex<Option<String>>>,
}

impl LoggingRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All rendered entries, updates applied, in append order.
    pub fn entries(&self) -> Vec<(Role, String)> {
        self.entries.lock().expect("renderer log poisoned").clone()
    }

    /// The last name passed to [`Renderer::set_title`], if any.
    pub fn title(&self) -> Option<String> {
        self.title.lock().expect("renderer title poisoned").clone()
    }
}

impl Renderer for LoggingRenderer {
    fn render(&mut self, role: Role, text: &str) -> DisplayHandle {
        let mut entries = self.entries.lock().expect("renderer log poisoned");
        entries.push((role, text.to_string()));
        DisplayHandle(entries.len() - 1)
    }

    fn update(&mut self, handle: DisplayHandle, text: &str) {
        let mut entries = self.entries.lock().expect("renderer log poisoned");
        if let Some(entry) = entries.get_mut(handle.0) {
            entry.1 = text.to_string();
        }
    }

    fn set_title(&mut self, name: &str) {
        *self.title.lock().expect("renderer title poisoned") = Some(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_renderer_applies_updates_in_place() {
        let mut renderer = LoggingRenderer::new();
        renderer.render(Role::User, "hi");
        let handle = renderer.render(Role::Assistant, "…thinking");
        renderer.update(handle, "hello");
        assert_eq!(
            renderer.entries(),
            vec![
                (Role::User, "hi".to_string()),
                (Role::Assistant, "hello".to_string()),
            ]
        );
    }

    #[test]
    fn clones_share_the_log() {
        let renderer = LoggingRenderer::new();
        let mut other = renderer.clone();
        other.render(Role::User, "hi");
        other.set_title("Avery");
        assert_eq!(renderer.entries().len(), 1);
        assert_eq!(renderer.title().as_deref(), Some("Avery"));
    }

    #[test]
    fn console_renderer_appends_lines() {
        let mut renderer = ConsoleRenderer::new(Vec::new());
        let handle = renderer.render(Role::Assistant, "…thinking");
        renderer.update(handle, "hello");
        let out = String::from_utf8(renderer.out).unwrap();
        assert_eq!(out, "assistant> …thinking\nassistant> hello\n");
    }
}
