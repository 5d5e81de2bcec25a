use std::collections::HashSet;

type Trigram = [char; 3];

/// Trigram similarity in [0, 1], in the style of PostgreSQL's pg_trgm.
///
/// Each alphanumeric word is padded with two leading spaces and one trailing
/// space before extracting 3-character windows. The score is the Jaccard
/// index of the two trigram sets.
pub fn similarity(a: &str, b: &str) -> f32 {
    let ta = trigrams(a);
    let tb = trigrams(b);

    if ta.is_empty() && tb.is_empty() {
        let (a, b) = (a.trim().to_lowercase(), b.trim().to_lowercase());
        return if !a.is_empty() && a == b { 1.0 } else { 0.0 };
    }

    let shared = ta.intersection(&tb).count();
    let union = ta.len() + tb.len() - shared;
    if union == 0 {
        0.0
    } else {
        shared as f32 / union as f32
    }
}

fn trigrams(s: &str) -> HashSet<Trigram> {
    let lower = s.to_lowercase();
    let mut set = HashSet::new();

    for word in lower.split(|c: char| !c.is_alphanumeric()) {
        if word.is_empty() {
            continue;
        }
        let padded: Vec<char> = "  "
            .chars()
            .chain(word.chars())
            .chain(std::iter::once(' '))
            .collect();
        for w in padded.windows(3) {
            set.insert([w[0], w[1], w[2]]);
        }
    }

    set
}
