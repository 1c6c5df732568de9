// src/fixtures.rs
// BibTeX corpora shared by the benches and integration tests.
// Not part of the library: pulled in with include!().

/// String definitions placed at the top of generated inputs
pub static COMMON_STRINGS: &str = r#"
@string{lncs = "Lecture Notes in Computer Science"}
@string{sigplan = "ACM SIGPLAN Notices"}
@string{spe = "Software: Practice and Experience"}
@string{springer = "Springer-Verlag"}
"#;

/// Representative entries of the kinds found in real bibliographies
pub struct TestEntry {
    pub name: &'static str,
    pub content: &'static str,
    pub field_count: usize,
}

pub const VENUE_ENTRIES: &[TestEntry] = &[
    TestEntry {
        name: "article_braced",
        content: r#"@ARTICLE{sammet2003programming,
    title = {Programming languages},
    author = {Sammet, J.E. and Hemmendinger, D.},
    journal = {Encyclopedia of Computer Science},
    pages = {1470--1475},
    year = 2003,
    publisher = {John Wiley and Sons Ltd.}
}"#,
        field_count: 6,
    },
    TestEntry {
        name: "book_umlauts",
        content: r#"@BOOK{bauer1998ubersetzung,
    title = {{\"U}bersetzung objektorientierter Programmiersprachen: Konzepte, abstrakte Maschinen und Praktikum {\glqq Java Compiler\grqq}},
    author = {Bauer, B. and H{\"o}llerer, R.},
    year = {1998},
    publisher = springer,
    isbn = {3-540-64156-7}
}"#,
        field_count: 5,
    },
    TestEntry {
        name: "article_concat",
        content: r#"@article{parr1995antlr,
    title = "{ANTLR}: A predicated-{LL}(k) parser generator",
    author = "Parr, T.J. and Quong, R.W.",
    journal = spe,
    volume = 25,
    number = 7,
    pages = "789--810",
    month = jul # "~1995",
    year = 1995
}"#,
        field_count: 8,
    },
    TestEntry {
        name: "misc_url",
        content: r#"@misc{wiki:chomsky,
    author = {Wikipedia},
    title = {Chomsky-Hierarchie --- Wikipedia{,} Die freie Enzyklop{\"a}die},
    year = {2003},
    url = {http://de.wikipedia.org/w/index.php?title=Chomsky-Hierarchie&oldid=71123007},
    note = {[Online; accessed 12-March-2010]},
}"#,
        field_count: 5,
    },
    TestEntry {
        name: "inproceedings_parens",
        content: r#"@inproceedings(parr2007definitive,
    author = {Terence Parr},
    title = {The Definitive {ANTLR} Reference: Building Domain-Specific Languages},
    booktitle = sigplan # { (Pragmatic Bookshelf)},
    year = 2007,
    url = {http://www.amazon.com/Definitive-ANTLR-Reference-Domain-Specific-Programmers/dp/0978739256%3FSubscriptionId%3D13CT5CVB80YFWJEPWS02}
)"#,
        field_count: 5,
    },
];

/// Generate a BibTeX document with `n_entries` entries cycling through the templates
pub fn generate_realistic_bibtex(n_entries: usize) -> String {
    let mut bib = String::with_capacity(n_entries * 400);

    bib.push_str(COMMON_STRINGS);
    bib.push_str("\n% generated corpus\n\n");

    for i in 0..n_entries {
        let template = &VENUE_ENTRIES[i % VENUE_ENTRIES.len()];

        // The key sits between the opening delimiter and the first comma
        let open = template.content.find(&['{', '('][..]).unwrap();
        let comma = template.content.find(',').unwrap();
        let entry = format!(
            "{}entry{}{}",
            &template.content[..=open],
            i,
            &template.content[comma..]
        );

        bib.push_str(&entry);
        bib.push_str("\n\n");
    }

    bib
}
