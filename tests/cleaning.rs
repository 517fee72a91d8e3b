use md_cleaner::{CleanerConfig, MarkdownCleaner, TextCleaner};

const SAMPLES: &[&str] = &[
    "",
    "\n\n\n",
    "plain text",
    "#Header\n##NoSpace",
    "-  Item1\n*Item2\n1.Item3",
    "Line 1\n\n\nLine 2",
    "Some text\n# Header\nSome other text\n- Item",
    "  # Indented   \n\n\n\n  -   nested\n    *deeper  \n2.two\ntext\n",
    "**bold** start\n---\n***\n###\n#\n",
    "para\r\n#Title\r\n\r\n\r\n- a\r\n- b\r\n",
    "\t\n  \n# H\n\n\n\n",
];

fn configs() -> Vec<CleanerConfig> {
    let mut configs = vec![CleanerConfig::default(), CleanerConfig::none()];
    let setters: [fn(&mut CleanerConfig); 4] = [
        |c| c.fix_spacing = true,
        |c| c.standardize_headers = true,
        |c| c.fix_lists = true,
        |c| c.remove_multiple_blanks = true,
    ];
    for set in setters {
        let mut config = CleanerConfig::none();
        set(&mut config);
        configs.push(config);
    }
    configs
}

#[test]
fn cleaning_is_idempotent() {
    for config in configs() {
        let cleaner = MarkdownCleaner::from_config(config);
        for sample in SAMPLES {
            let once = cleaner.clean(sample);
            let twice = cleaner.clean(&once);
            assert_eq!(once, twice, "config {config}, input {sample:?}");
        }
    }
}

#[test]
fn output_ends_with_exactly_one_newline() {
    let mut all = configs();
    all.push(CleanerConfig {
        extract_text: true,
        ..CleanerConfig::none()
    });

    for config in all {
        let cleaner = MarkdownCleaner::from_config(config);
        for sample in SAMPLES {
            let out = cleaner.clean(sample);
            let ok = out == "\n" || (out.ends_with('\n') && !out.ends_with("\n\n"));
            assert!(ok, "config {config}, input {sample:?}, output {out:?}");
        }
    }
}

#[test]
fn default_cleaner_normalizes_a_document() {
    let input = "#Title  \nIntro text\n*first\n-   second\n\n\n\n##Section\n1.one\n2.  two";
    let expected = "# Title\nIntro text\n\n* first\n- second\n\n## Section\n\n1. one\n2. two\n";
    assert_eq!(MarkdownCleaner::default().clean(input), expected);
}

#[test]
fn adjacent_list_items_never_separated() {
    for config in configs() {
        let out = MarkdownCleaner::from_config(config).clean("- a\n- b\n1. c\n2. d");
        assert_eq!(out, "- a\n- b\n1. c\n2. d\n", "config {config}");
    }
}

#[test]
fn extraction_strips_markup() {
    let cleaner = MarkdownCleaner::new().extract_text(true).build().unwrap();
    let input = "# Header\nThis is *bold* and **bolder**.\n- Item 1\n- Item 2\n[Link](url)";
    assert_eq!(
        cleaner.clean(input),
        "Header\nThis is bold and bolder.\n• Item 1\n• Item 2\nLink\n"
    );
}

#[test]
fn extraction_ignores_other_flags() {
    let input = "##  Title  \n\n\n\n> quote with `code` and <em>html</em>";
    let with_all = MarkdownCleaner::from_config(CleanerConfig {
        extract_text: true,
        ..CleanerConfig::default()
    });
    let alone = MarkdownCleaner::from_config(CleanerConfig {
        extract_text: true,
        ..CleanerConfig::none()
    });
    assert_eq!(with_all.clean(input), alone.clean(input));
    assert_eq!(alone.clean(input), "Title  \nquote with  and html\n");
}
