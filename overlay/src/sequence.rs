// request sequencing
//
// neither the filter load nor the search can be cancelled once started, so
// instead each start captures a ticket from a monotonically increasing counter
// and a response is only applied if its ticket is still the latest one

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    // make every outstanding ticket stale without issuing a new one
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut seq = RequestSequence::default();

        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn invalidate_makes_outstanding_tickets_stale() {
        let mut seq = RequestSequence::default();

        let ticket = seq.begin();
        seq.invalidate();

        assert!(!seq.is_current(ticket));
    }
}
