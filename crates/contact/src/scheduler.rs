use std::time::Duration;

/// Issues tokens for scheduled steps. Issuing or cancelling invalidates every
/// token handed out before, so only the most recent step may still apply.
#[derive(Debug, Default)]
pub struct Scheduler {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(u64);

/// A step to run once `after` has elapsed, valid while its token is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub token: Token,
    pub after: Duration,
}

impl Scheduler {
    pub fn issue(&mut self) -> Token {
        self.generation += 1;
        Token(self.generation)
    }

    pub fn tick(&mut self, after: Duration) -> Tick {
        Tick {
            token: self.issue(),
            after,
        }
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, token: Token) -> bool {
        self.generation == token.0
    }
}
