//! Registration-time username checks: fold look-alikes to one canonical key
//! so `pаypаl` (Cyrillic а) collides with an existing `paypal`, and reject
//! names that would have needed folding at all.

use std::collections::HashMap;
use std::error::Error;

use unicode_confusables::{Error as ConfusablesError, NFKC, Sanitizer, StripZeroWidth};

struct Registry {
    canonical: Sanitizer,
    strict: Sanitizer,
    taken: HashMap<String, String>,
}

impl Registry {
    fn new() -> Self {
        Self {
            canonical: Sanitizer::identifier(),
            strict: Sanitizer::builder()
                .add_stage(NFKC)
                .add_stage(StripZeroWidth)
                .reject_confusables()
                .build(),
            taken: HashMap::new(),
        }
    }

    fn register(&mut self, name: &str) -> Result<(), Box<dyn Error>> {
        let key = self.canonical.process(name)?.into_owned();
        if let Some(owner) = self.taken.get(&key) {
            return Err(format!("`{name}` is indistinguishable from existing `{owner}`").into());
        }
        if let Err(ConfusablesError::Stage(e)) = self.strict.process(name) {
            println!("  warning for `{name}`: {e}");
        }
        self.taken.insert(key, name.to_owned());
        Ok(())
    }
}

fn main() {
    let mut registry = Registry::new();

    let attempts = [
        "paypal",
        "pаypаl",
        "pay\u{200B}pal",
        "ｐａｙｐａｌ",
        "rnicrosoft",
        "microsoft",
        "café",
        "cаfé",
    ];
    for name in attempts {
        match registry.register(name) {
            Ok(()) => println!("registered {name:?}"),
            Err(e) => println!("rejected   {name:?}: {e}"),
        }
    }
}
