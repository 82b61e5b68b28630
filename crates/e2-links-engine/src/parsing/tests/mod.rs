//! Tokenizer tests over whole strings.
//!
//! Every test runs its output through [`invariants::check`], so losslessness
//! is asserted everywhere, not only in the dedicated sweep.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{Link, LinkKind, Segment, tokenize};

fn parse(input: &str) -> Vec<Segment> {
    let _ = env_logger::builder().is_test(true).try_init();
    let segments = tokenize(input);
    invariants::check(input, &segments);
    segments
}

fn links(segments: &[Segment]) -> Vec<&Link> {
    segments.iter().filter_map(Segment::as_link).collect()
}

#[test]
fn empty_input() {
    assert!(parse("").is_empty());
}

#[test]
fn plain_text_only() {
    assert_eq!(parse("Just plain text"), vec![Segment::text("Just plain text")]);
}

#[test]
fn single_link() {
    let segs = parse("[node]");
    assert_eq!(segs.len(), 1);
    assert_eq!(links(&segs)[0].kind.title(), Some("node"));
}

#[test]
fn link_in_middle() {
    let segs = parse("Before [link] after");
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[0], Segment::text("Before "));
    assert_eq!(segs[1].as_link().map(|l| l.kind.name()), Some("internal"));
    assert_eq!(segs[2], Segment::text(" after"));
}

#[test]
fn multiple_links() {
    let segs = parse("[one] and [two]");
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[0].as_link().and_then(|l| l.kind.title()), Some("one"));
    assert_eq!(segs[1], Segment::text(" and "));
    assert_eq!(segs[2].as_link().and_then(|l| l.kind.title()), Some("two"));
}

#[test]
fn mixed_external_and_internal() {
    let segs = parse("Visit [https://reddit.com] or [home page]");
    assert_eq!(segs.len(), 4);
    assert!(segs[1].as_link().is_some_and(Link::is_external));
    assert_eq!(segs[3].as_link().map(|l| l.kind.name()), Some("internal"));
}

#[test]
fn adjacent_links_have_no_text_between() {
    let segs = parse("[one][two]");
    assert_eq!(segs.len(), 2);
    assert!(segs.iter().all(|s| s.as_link().is_some()));
}

#[test]
fn empty_brackets_stay_literal() {
    assert_eq!(
        parse("a [] b"),
        vec![
            Segment::text("a "),
            Segment::text("[]"),
            Segment::text(" b")
        ]
    );
}

#[test]
fn rejected_by_tag_stays_literal() {
    assert_eq!(
        parse("see [title[by ]] here"),
        vec![
            Segment::text("see "),
            Segment::text("[title[by ]]"),
            Segment::text(" here")
        ]
    );
}

#[rstest]
#[case("[\u{feff}]")]
#[case("[ \u{feff} ]")]
#[case("[\u{a0}\u{3000}]")]
fn invisible_whitespace_brackets_stay_literal(#[case] input: &str) {
    assert_eq!(parse(input), vec![Segment::text(input)]);
}

#[test]
fn unclosed_bracket_stays_text() {
    assert_eq!(parse("[foo"), vec![Segment::text("[foo")]);
    assert_eq!(parse("[[unclosed"), vec![Segment::text("[[unclosed")]);
}

#[test]
fn bare_urls_are_not_links() {
    assert_eq!(
        parse("Visit https://reddit.com for more"),
        vec![Segment::text("Visit https://reddit.com for more")]
    );
}

#[test]
fn index_brackets_become_links() {
    let segs = parse("Array[0] = value");
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[1].as_link().map(|l| l.href.as_str()), Some("/title/0"));
}

#[test]
fn deeper_nesting_falls_back_to_inner_expression() {
    let segs = parse("[a[b[c]]]");
    assert_eq!(segs[0], Segment::text("[a"));
    assert_eq!(
        segs[1].as_link().map(|l| &l.kind),
        Some(&LinkKind::Typed {
            title: "b".into(),
            nodetype: "c".into()
        })
    );
    assert_eq!(segs[2], Segment::text("]"));
}

#[test]
fn unicode_around_links() {
    let segs = parse("日本 [café[User]] ✓");
    assert_eq!(
        links(&segs)[0].kind,
        LinkKind::Typed {
            title: "café".into(),
            nodetype: "user".into()
        }
    );
    assert_eq!(links(&segs)[0].href, "/user/caf%C3%A9");
}

#[test]
fn raw_keeps_original_bracket_text() {
    let segs = parse("x [  spaced | shown ] y");
    let link = links(&segs)[0];
    assert_eq!(link.raw, "[  spaced | shown ]");
    assert_eq!(link.kind.title(), Some("spaced"));
    assert_eq!(link.display, "shown");
}

// End-to-end scenarios

#[test]
fn scenario_node_title() {
    assert_eq!(
        parse("[node title]"),
        vec![Segment::Link(Link {
            kind: LinkKind::Internal {
                title: "node title".into()
            },
            display: "node title".into(),
            href: "/title/node%20title".into(),
            raw: "[node title]".into(),
        })]
    );
}

#[test]
fn scenario_external_with_display() {
    assert_eq!(
        parse("[https://reddit.com|Reddit]"),
        vec![Segment::Link(Link {
            kind: LinkKind::External {
                url: "https://reddit.com".into()
            },
            display: "Reddit".into(),
            href: "https://reddit.com".into(),
            raw: "[https://reddit.com|Reddit]".into(),
        })]
    );
}

#[test]
fn scenario_typed_user() {
    assert_eq!(
        parse("[username[user]]"),
        vec![Segment::Link(Link {
            kind: LinkKind::Typed {
                title: "username".into(),
                nodetype: "user".into()
            },
            display: "username".into(),
            href: "/user/username".into(),
            raw: "[username[user]]".into(),
        })]
    );
}

#[test]
fn scenario_comment() {
    assert_eq!(
        parse("[Discussion[42]]"),
        vec![Segment::Link(Link {
            kind: LinkKind::Comment {
                title: "Discussion".into(),
                comment_id: "42".into(),
                anchor: "debatecomment_42".into(),
            },
            display: "Discussion".into(),
            href: "/title/Discussion".into(),
            raw: "[Discussion[42]]".into(),
        })]
    );
}

#[rstest]
#[case("")]
#[case("[")]
#[case("]")]
#[case("[]]")]
#[case("[[]]")]
#[case("[[[]]]")]
#[case("][")]
#[case("[a|b|c[d]]")]
#[case("[<b>[x]</b>]")]
#[case("[<unclosed tag]")]
#[case("[https://x.com|[y]]")]
#[case("[\u{feff}]")]
#[case("[\n]")]
#[case("[a\nb[by c\n]]")]
#[case("🙂[🙂[🙂]]🙂")]
fn degenerate_inputs_are_lossless(#[case] input: &str) {
    parse(input);
}

/// Every string up to length six over a small bracket-heavy alphabet.
#[test]
fn exhaustive_small_inputs_are_lossless() {
    const ALPHABET: [char; 5] = ['[', ']', '|', 'b', ' '];
    const MAX_LEN: u32 = 6;

    let mut input = String::new();
    for len in 0..=MAX_LEN {
        for mut n in 0..ALPHABET.len().pow(len) {
            input.clear();
            for _ in 0..len {
                input.push(ALPHABET[n % ALPHABET.len()]);
                n /= ALPHABET.len();
            }
            invariants::check(&input, &tokenize(&input));
        }
    }
}
