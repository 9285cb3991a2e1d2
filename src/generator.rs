use chrono::{DateTime, Duration, Utc};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

const HEX: &[u8; 16] = b"0123456789abcdef";
const ONE_YEAR_SECS: i64 = 365 * 24 * 60 * 60;

pub trait LogLineGenerator {
    fn generate(&mut self) -> String;
}

// Fake `git log` entries, with a `Merge:` line on about one in five
pub struct CommitEntryGenerator<R> {
    rng: R,
    anchor: DateTime<Utc>,
}

impl<R: Rng> CommitEntryGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            anchor: Utc::now(),
        }
    }

    fn hex(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| HEX[self.rng.random_range(0..HEX.len())] as char)
            .collect()
    }
}

impl<R: Rng> LogLineGenerator for CommitEntryGenerator<R> {
    fn generate(&mut self) -> String {
        let mut entry = format!("commit {}\n", self.hex(40));
        if self.rng.random_bool(0.2) {
            let (left, right) = (self.hex(7), self.hex(7));
            entry.push_str(&format!("Merge: {left} {right}\n"));
        }

        let name: String = Name().fake_with_rng(&mut self.rng);
        let email: String = SafeEmail().fake_with_rng(&mut self.rng);
        let date = self.anchor - Duration::seconds(self.rng.random_range(0..ONE_YEAR_SECS));
        let words: Vec<String> = Words(3..8).fake_with_rng(&mut self.rng);

        entry.push_str(&format!("Author: {name} <{email}>\n"));
        entry.push_str(&format!("Date: {}\n", date.format("%a %b %-d %H:%M:%S %Y %z")));
        entry.push_str(&format!("\n    {}", words.join(" ")));
        entry
    }
}
