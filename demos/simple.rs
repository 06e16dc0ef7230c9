use std::error::Error;

use unicode_confusables::{
    Form, NFC, NFKC, Sanitizer, StripZeroWidth, are_confusable, detect_confusables,
    normalize_confusables, normalize_unicode,
};

fn main() -> Result<(), Box<dyn Error>> {
    // ────────────────────────────────────────────────────────────────
    // Detection: which characters are posing as something else?
    // ────────────────────────────────────────────────────────────────
    let text = "Ηello Wοrld! Тhis hаs cοnfusаble chаrаcters.";
    let mut found: Vec<String> = detect_confusables(text).into_iter().collect();
    found.sort_unstable();
    println!("Detected : {found:?}");
    // → ["Η", "ο", "Т", "а"]

    println!("Skeleton : {}", normalize_confusables(text));
    // → Hello World! This has confusable characters.

    // ────────────────────────────────────────────────────────────────
    // Styled and fullwidth letters fold through compatibility decomposition
    // ────────────────────────────────────────────────────────────────
    println!("Styled   : {}", normalize_confusables("𝐚𝐝𝐦𝐢𝐧"));
    // → adrnin (m reads as rn)
    println!("Spoof?   : {}", are_confusable("admin", "𝐚𝐝𝐦𝐢𝐧"));
    // → true

    // ────────────────────────────────────────────────────────────────
    // The four normalization forms
    // ────────────────────────────────────────────────────────────────
    let input = "ﬁancée\u{200D} ①";
    for form in Form::ALL {
        println!(
            "{form:<5}    : {:?} (zero-width stripped: {:?})",
            normalize_unicode(input, form, false),
            normalize_unicode(input, form, true)
        );
    }

    // ────────────────────────────────────────────────────────────────
    // Custom pipelines: compose stages into a policy
    // ────────────────────────────────────────────────────────────────
    let display = Sanitizer::builder()
        .add_stage(StripZeroWidth)
        .add_stage(NFC)
        .build();
    println!("Display  : {}", display.process("cafe\u{0301}\u{200B}")?);
    // → café

    let search = Sanitizer::builder().add_stage(NFKC).add_stage(StripZeroWidth).build();
    println!("Search   : {}", search.process("Ｓｅａｒｃｈ ﬁle")?);
    // → Search file

    Ok(())
}
