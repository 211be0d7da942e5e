//! Integration tests for the pagination engine.

use typeflow::{
    paginate, to_json, CharCountMeasurer, Document, FnMeasurer, JsonFormat, LayoutResult,
    LayoutWarning, PageGeometry, Paginator, Section, Style, StyleKind,
};

/// The measure function from the reference scenario: 0.6 units per
/// character, independent of style.
fn scenario_measurer() -> FnMeasurer<impl Fn(&str, Style) -> f32> {
    FnMeasurer(|text: &str, _| 0.6 * text.chars().count() as f32)
}

fn layout_with_date(doc: &Document, geometry: &PageGeometry) -> LayoutResult {
    Paginator::new(scenario_measurer())
        .with_geometry(geometry.clone())
        .with_generation_date("1404/05/15")
        .paginate(doc)
        .unwrap()
}

#[test]
fn single_section_fits_on_one_page() {
    // One heading line, then two single-line paragraphs, all on page 0.
    let geometry = PageGeometry::a4();
    let doc = Document::new("").with_section("فصل یک", "پاراگراف اول.\n\nپاراگراف دوم.");
    let layout = layout_with_date(&doc, &geometry);

    assert_eq!(layout.total_pages, 1);
    let lines: Vec<_> = layout.lines().collect();
    assert_eq!(lines.len(), 3);

    assert_eq!(lines[0].style.kind, StyleKind::Heading);
    assert_eq!(lines[0].text, "فصل یک");
    assert_eq!(lines[1].style.kind, StyleKind::Body);
    assert_eq!(lines[1].text, "پاراگراف اول.");
    assert_eq!(lines[2].style.kind, StyleKind::Body);
    assert_eq!(lines[2].text, "پاراگراف دوم.");

    for line in &lines {
        assert_eq!(line.page, 0);
    }
    assert!(lines[0].y < lines[1].y);
    assert!(lines[1].y < lines[2].y);
    assert!(layout.warnings.is_empty());
}

#[test]
fn long_document_reaches_expected_page_count() {
    // 458 one-line paragraphs of vertical extent 7 each need 3206 units
    // against a printable height of 257: ceil(3200 / 257) = 13 pages, with
    // every spacing rule zeroed so the arithmetic is exact.
    let geometry = PageGeometry {
        heading_spacing_before: 0.0,
        heading_spacing_after: 0.0,
        title_spacing_after: 0.0,
        paragraph_spacing: 0.0,
        ..PageGeometry::a4()
    };
    // 90 chars at 1.0/char measure: one token per line (two would be 181).
    let measurer = FnMeasurer(|text: &str, _| text.chars().count() as f32);
    let body = vec!["م".repeat(90); 458].join(" ");
    let doc = Document::new("").with_section("", &body);

    let layout = Paginator::new(measurer)
        .with_geometry(geometry)
        .with_generation_date("1404/05/15")
        .paginate(&doc)
        .unwrap();

    assert_eq!(layout.line_count(), 458);
    // 36 lines fit per page: 458 = 12 * 36 + 26.
    assert_eq!(layout.total_pages, 13);
    assert_eq!(layout.pages.last().unwrap().line_count(), 26);
}

#[test]
fn width_bound_holds_for_unflagged_lines() {
    let geometry = PageGeometry::a4();
    let doc = Document::new("داستان خواب شما").with_section(
        "فصل یک",
        "این یک پاراگراف بلند است که باید روی چند خط شکسته شود چون عرض قابل چاپ محدود است \
         و واژه ها یکی یکی اضافه می شوند تا خط پر شود.",
    );
    let layout = layout_with_date(&doc, &geometry);

    for line in layout.lines() {
        if !line.overflow {
            assert!(line.width <= geometry.printable_width());
        }
        // Right edge anchored to the right margin.
        let right_edge = line.x + line.width;
        assert!((right_edge - (geometry.page_width - geometry.margin_right)).abs() < 1e-3);
    }
}

#[test]
fn vertical_order_is_monotonic_within_each_page() {
    let geometry = PageGeometry::a4();
    let body = vec!["واژه"; 2000].join(" ");
    let doc = Document::new("عنوان")
        .with_section("فصل یک", &body)
        .with_section("فصل دو", &body);
    let layout = layout_with_date(&doc, &geometry);

    assert!(layout.total_pages > 1);
    for page in &layout.pages {
        for pair in page.lines.windows(2) {
            assert!(
                pair[1].y - pair[0].y >= geometry.line_height - 1e-3,
                "lines too close on page {}: {} then {}",
                page.index,
                pair[0].y,
                pair[1].y
            );
        }
    }
}

#[test]
fn no_line_starts_below_the_bottom_margin() {
    let geometry = PageGeometry::a4();
    let body = vec!["واژه"; 3000].join(" ");
    let doc = Document::new("").with_section("فصل", &body);
    let layout = layout_with_date(&doc, &geometry);

    let bottom = geometry.page_height - geometry.margin_bottom;
    for line in layout.lines() {
        assert!(line.y + geometry.line_height <= bottom + 1e-3);
    }
}

#[test]
fn pagination_is_deterministic() {
    let geometry = PageGeometry::a4();
    let doc = Document::new("عنوان")
        .with_section("فصل یک", &vec!["واژه"; 500].join(" "))
        .with_section("فصل دو", "پایان.");

    let first = layout_with_date(&doc, &geometry);
    let second = layout_with_date(&doc, &geometry);

    assert_eq!(
        to_json(&first, JsonFormat::Compact).unwrap(),
        to_json(&second, JsonFormat::Compact).unwrap()
    );
}

#[test]
fn page_count_matches_line_page_indices_and_footers() {
    let geometry = PageGeometry::a4();
    let body = vec!["واژه"; 2500].join(" ");
    let doc = Document::new("عنوان").with_section("فصل", &body);
    let layout = layout_with_date(&doc, &geometry);

    let max_page = layout.lines().map(|line| line.page).max().unwrap();
    assert_eq!(layout.total_pages, max_page + 1);
    assert_eq!(layout.pages.len(), layout.total_pages);

    for (i, page) in layout.pages.iter().enumerate() {
        assert_eq!(page.index, i);
        assert!(!page.footer_text.is_empty());
        assert!(page
            .footer_text
            .contains(&format!("صفحه {} از {}", i + 1, layout.total_pages)));
        assert!(page.footer_text.contains("تاریخ تولید: 1404/05/15"));
    }
}

#[test]
fn empty_body_section_still_produces_heading_lines() {
    let geometry = PageGeometry::a4();
    let doc = Document::new("")
        .with_section("فصل خالی", "   \n\n  \n")
        .with_section("فصل دوم", "متن.");
    let layout = layout_with_date(&doc, &geometry);

    let lines: Vec<_> = layout.lines().collect();
    assert_eq!(lines[0].text, "فصل خالی");
    assert_eq!(lines[0].style.kind, StyleKind::Heading);
    assert_eq!(lines[1].text, "فصل دوم");
    assert_eq!(lines[2].text, "متن.");
}

#[test]
fn oversized_token_is_flagged_not_clipped() {
    let geometry = PageGeometry::a4();
    // 300 chars at 0.6 = 180 units, wider than the 170 printable width.
    let token = "ک".repeat(300);
    let doc = Document::new("").with_section("فصل", &token);
    let layout = layout_with_date(&doc, &geometry);

    let oversized: Vec<_> = layout.lines().filter(|line| line.overflow).collect();
    assert_eq!(oversized.len(), 1);
    assert_eq!(oversized[0].text.chars().count(), 300);

    assert!(layout.has_overflow());
    assert!(layout.warnings.iter().any(|w| matches!(
        w,
        LayoutWarning::OversizedToken { width, max_width, .. }
            if *width > *max_width
    )));
}

#[test]
fn oversized_line_height_still_terminates() {
    let geometry = PageGeometry {
        line_height: 400.0,
        ..PageGeometry::a4()
    };
    let doc = Document::new("").with_section("فصل", "اول\n\nدوم\n\nسوم");
    let layout = layout_with_date(&doc, &geometry);

    // Heading plus three paragraphs, one line per page.
    assert_eq!(layout.line_count(), 4);
    assert_eq!(layout.total_pages, 4);
    assert_eq!(
        layout
            .warnings
            .iter()
            .filter(|w| matches!(w, LayoutWarning::OversizedLine { .. }))
            .count(),
        4
    );
}

#[test]
fn invalid_geometry_fails_before_layout() {
    let geometry = PageGeometry {
        page_width: 30.0,
        ..PageGeometry::a4()
    };
    let doc = Document::new("عنوان");
    let err = paginate(&doc, &geometry, &CharCountMeasurer::new()).unwrap_err();
    assert!(matches!(err, typeflow::Error::InvalidGeometry(_)));
}

#[test]
fn measurement_failure_aborts_the_run() {
    let measurer = FnMeasurer(|text: &str, _| {
        if text.contains("بد") {
            f32::NAN
        } else {
            text.chars().count() as f32
        }
    });
    let doc = Document::new("").with_section("فصل", "واژه بد اینجاست");
    let err = paginate(&doc, &PageGeometry::a4(), &measurer).unwrap_err();

    match err {
        typeflow::Error::Measurement { text, .. } => assert!(text.contains("بد")),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn sections_flow_in_source_order() {
    let geometry = PageGeometry::a4();
    let mut doc = Document::new("");
    for i in 1..=5 {
        doc.add_section(Section::new(format!("فصل {}", i), format!("متن {}.", i)));
    }
    let layout = layout_with_date(&doc, &geometry);

    let headings: Vec<_> = layout
        .lines()
        .filter(|line| line.style.kind == StyleKind::Heading)
        .map(|line| line.text.as_str())
        .collect();
    assert_eq!(headings, vec!["فصل 1", "فصل 2", "فصل 3", "فصل 4", "فصل 5"]);
}
