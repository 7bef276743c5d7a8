/// Success notification that is dismissed after [`crate::SUCCESS_TOAST_TIMEOUT_MS`].
///
/// Every shown message gets a new ticket. A dismiss timer only hides the message it was started
/// for, so a timer outliving its message never hides a newer one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Toast {
    current: Option<(u64, String)>,
    next_ticket: u64,
}

impl Toast {
    /// Replaces any visible message and returns the ticket for its dismiss timer.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.current = Some((ticket, message.into()));
        ticket
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, message)| message.as_str())
    }

    #[must_use]
    pub fn ticket(&self) -> Option<u64> {
        self.current.as_ref().map(|(ticket, _)| *ticket)
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Hides the message if it is still the one shown with `ticket`.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if self.ticket() == Some(ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
