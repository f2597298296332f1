//! Generation tickets for in-flight requests.
//!
//! Every async action takes a [`Ticket`] when it starts. When its response
//! arrives the ticket is checked against the latest one issued for the same
//! [`RequestKind`]; anything older is stale and gets dropped, so the last
//! *issued* request wins regardless of which response lands last.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Search and locate: both replace the marker collection.
    Placement,
    Route,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    kind: RequestKind,
    generation: u64,
}

impl Ticket {
    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
struct Channel {
    issued: u64,
    settled: u64,
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    placement: Channel,
    route: Channel,
}

impl RequestTracker {
    fn channel(&mut self, kind: RequestKind) -> &mut Channel {
        match kind {
            RequestKind::Placement => &mut self.placement,
            RequestKind::Route => &mut self.route,
        }
    }

    pub fn issue(&mut self, kind: RequestKind) -> Ticket {
        let channel = self.channel(kind);
        channel.issued += 1;
        Ticket {
            kind,
            generation: channel.issued,
        }
    }

    /// Mark `ticket` as answered. Returns `false` when a newer request of the
    /// same kind has been issued since, i.e. the response must be discarded.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        let channel = self.channel(ticket.kind);
        if ticket.generation != channel.issued {
            return false;
        }
        channel.settled = ticket.generation;
        true
    }

    /// Whether the latest request of `kind` is still waiting for its answer.
    pub fn is_pending(&self, kind: RequestKind) -> bool {
        let channel = match kind {
            RequestKind::Placement => &self.placement,
            RequestKind::Route => &self.route,
        };
        channel.settled < channel.issued
    }
}
