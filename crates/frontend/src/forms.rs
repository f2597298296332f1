//! Form state that outlives a single render.

/// Which route input a key press came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteField {
    Start,
    End,
}

/// Contents of the start and destination inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteInputs {
    pub start: String,
    pub end: String,
}

impl RouteInputs {
    pub fn set(&mut self, field: RouteField, value: String) {
        match field {
            RouteField::Start => self.start = value,
            RouteField::End => self.end = value,
        }
    }

    /// Enter in one input calculates the route only once the other one is
    /// filled in. Whitespace does not count.
    pub fn submits_on_enter(&self, field: RouteField) -> bool {
        let other = match field {
            RouteField::Start => &self.end,
            RouteField::End => &self.start,
        };
        !other.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.start.clear();
        self.end.clear();
    }
}
