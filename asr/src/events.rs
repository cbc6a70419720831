use std::{cell::RefCell, collections::VecDeque, rc::Rc};

pub use asr_gl::glfw::{Action, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key went down or auto-repeated.
    KeyDown(Key),
    /// The window asked to close, or Escape was pressed with `escape_quits`.
    Quit,
}

/// Events drained by one `process_events` call, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    events: Vec<Event>,
}

impl Events {
    pub fn should_stop(&self) -> bool {
        self.events.contains(&Event::Quit)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn keys_down(&self) -> impl Iterator<Item = Key> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::KeyDown(key) => Some(*key),
            Event::Quit => None,
        })
    }
}

impl IntoIterator for Events {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a Events {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Fed by the window's key callback between pumps.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<Event>,
    escape_quits: bool,
}

pub type SharedEventQueue = Rc<RefCell<EventQueue>>;

impl EventQueue {
    pub fn new(escape_quits: bool) -> Self {
        Self {
            queue: VecDeque::new(),
            escape_quits,
        }
    }

    pub fn shared(escape_quits: bool) -> SharedEventQueue {
        Rc::new(RefCell::new(Self::new(escape_quits)))
    }

    pub fn push_key(&mut self, key: Key, action: Action) {
        match action {
            Action::Press | Action::Repeat => {
                self.queue.push_back(Event::KeyDown(key));
                if self.escape_quits && key == Key::Escape {
                    self.queue.push_back(Event::Quit);
                }
            }
            Action::Release => {}
        }
    }

    pub fn push_quit(&mut self) {
        self.queue.push_back(Event::Quit);
    }

    pub fn drain(&mut self) -> Events {
        Events {
            events: self.queue.drain(..).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
