// src/specs/skills.rs
//! Skill canonicalization for job titles.
//!
//! `SKILL_PATTERNS` maps case-insensitive, word-bounded surface forms to one
//! canonical display name (many-to-one: `go` / `golang` → `Go`). Order is fixed
//! so compilation and matching stay deterministic, although the result set is
//! sorted and deduplicated anyway.
//!
//! The `regex` crate has no look-around, so forms ending in a symbol (`c++`, `c#`)
//! are closed by "non-word char or end of text", and bare `c` refuses to be
//! followed by `+` or `#`.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

pub const SKILL_PATTERNS: &[(&str, &str)] = &[
    (r"\bpython\b", "Python"),
    (r"\bsql\b", "SQL"),
    (r"\bexcel\b", "Excel"),
    (r"\b(?:power\s*bi|powerbi)\b", "Power BI"),
    (r"\btableau\b", "Tableau"),
    (r"\br\b", "R"),
    (r"\bjava\b", "Java"),
    (r"\bjavascript\b", "JavaScript"),
    (r"\btypescript\b", "TypeScript"),
    (r"\bhtml\b", "HTML"),
    (r"\bcss\b", "CSS"),
    (r"\breact\b", "React"),
    (r"\bangular\b", "Angular"),
    (r"\bvue\b", "Vue"),
    (r"\bnode(?:\.js)?\b", "Node.js"),
    (r"\bdjango\b", "Django"),
    (r"\bflask\b", "Flask"),
    (r"\bspring\b", "Spring"),
    (r"\baws\b", "AWS"),
    (r"\bazure\b", "Azure"),
    (r"\bgcp\b", "GCP"),
    (r"\bdocker\b", "Docker"),
    (r"\bkubernetes\b", "Kubernetes"),
    (r"\bgit\b", "Git"),
    (r"\blinux\b", "Linux"),
    (r"\bpandas\b", "Pandas"),
    (r"\bnumpy\b", "NumPy"),
    (r"\b(?:scikit-?learn|sklearn)\b", "Scikit-learn"),
    (r"\btensorflow\b", "TensorFlow"),
    (r"\bpytorch\b", "PyTorch"),
    (r"\bc\+\+(?:\W|$)", "C++"),
    (r"\bc#(?:\W|$)", "C#"),
    (r"\bc(?:[^\w+#]|$)", "C"),
    (r"\bphp\b", "PHP"),
    (r"\bruby\b", "Ruby"),
    (r"\bgo(?:lang)?\b", "Go"),
    (r"\bswift\b", "Swift"),
    (r"\bkotlin\b", "Kotlin"),
    (r"\bspark\b", "Spark"),
    (r"\bhadoop\b", "Hadoop"),
];

static COMPILED: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    SKILL_PATTERNS
        .iter()
        .map(|&(pat, canonical)| {
            let re = Regex::new(&join!("(?i)", pat)).expect("static skill pattern");
            (re, canonical)
        })
        .collect()
});

/// Canonical skills mentioned in `text`, deduplicated and sorted.
/// `None` and empty text yield an empty list.
pub fn extract_skills(text: Option<&str>) -> Vec<String> {
    let text = match text {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return Vec::new(),
    };

    let found: BTreeSet<&str> = COMPILED
        .iter()
        .filter(|(re, _)| re.is_match(&text))
        .map(|&(_, canonical)| canonical)
        .collect();

    found.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACES: &[(&str, &str)] = &[
        ("python", "Python"), ("sql", "SQL"), ("excel", "Excel"),
        ("power bi", "Power BI"), ("powerbi", "Power BI"), ("tableau", "Tableau"),
        ("r", "R"), ("java", "Java"), ("javascript", "JavaScript"),
        ("typescript", "TypeScript"), ("html", "HTML"), ("css", "CSS"),
        ("react", "React"), ("angular", "Angular"), ("vue", "Vue"),
        ("node", "Node.js"), ("node.js", "Node.js"), ("django", "Django"),
        ("flask", "Flask"), ("spring", "Spring"), ("aws", "AWS"), ("azure", "Azure"),
        ("gcp", "GCP"), ("docker", "Docker"), ("kubernetes", "Kubernetes"),
        ("git", "Git"), ("linux", "Linux"), ("pandas", "Pandas"), ("numpy", "NumPy"),
        ("scikit-learn", "Scikit-learn"), ("scikitlearn", "Scikit-learn"),
        ("sklearn", "Scikit-learn"), ("tensorflow", "TensorFlow"), ("pytorch", "PyTorch"),
        ("c++", "C++"), ("c#", "C#"), ("c", "C"), ("php", "PHP"), ("ruby", "Ruby"),
        ("go", "Go"), ("golang", "Go"), ("swift", "Swift"), ("kotlin", "Kotlin"),
        ("spark", "Spark"), ("hadoop", "Hadoop"),
    ];

    #[test]
    fn every_surface_form_yields_its_canonical_once() {
        for &(surface, canonical) in SURFACES {
            for form in [surface.to_string(), surface.to_uppercase()] {
                let title = format!("Senior {form} Engineer ({form}, {form})");
                let skills = extract_skills(Some(&title));
                let hits = skills.iter().filter(|s| *s == canonical).count();
                assert_eq!(hits, 1, "{title:?} → {skills:?}");
            }
        }
    }

    #[test]
    fn empty_and_none_yield_nothing() {
        assert!(extract_skills(Some("")).is_empty());
        assert!(extract_skills(None).is_empty());
        assert!(extract_skills(Some("Chief Happiness Officer")).is_empty());
    }

    #[test]
    fn result_is_sorted_and_deduplicated() {
        let skills = extract_skills(Some("Python/SQL developer, python and Golang, Go"));
        assert_eq!(skills, vec!["Go", "Python", "SQL"]);
    }

    #[test]
    fn word_boundaries_are_respected() {
        // "script", "reactor", "going", "gitlab" must not leak skills
        assert!(extract_skills(Some("Scriptwriter")).is_empty());
        assert!(extract_skills(Some("Reactor Operator")).is_empty());
        assert!(extract_skills(Some("Ongoing Support")).is_empty());
        assert_eq!(extract_skills(Some("JavaScript Developer")), vec!["JavaScript"]);
    }

    #[test]
    fn c_family_does_not_bleed() {
        assert_eq!(extract_skills(Some("C++ Developer")), vec!["C++"]);
        assert_eq!(extract_skills(Some("C# Engineer")), vec!["C#"]);
        assert_eq!(extract_skills(Some("C/C++ Embedded")), vec!["C", "C++"]);
    }

    #[test]
    fn spec_example_titles() {
        assert_eq!(extract_skills(Some("Python Developer")), vec!["Python"]);
        assert_eq!(extract_skills(Some("Python/SQL Analyst")), vec!["Python", "SQL"]);
    }
}
