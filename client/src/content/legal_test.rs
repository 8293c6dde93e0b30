use super::*;

#[test]
fn render_html_emits_headings_and_lists() {
    let out = render_html("#### 見出し\n\n- 一\n- 二\n");
    assert!(out.contains("<h4>見出し</h4>"));
    assert!(out.contains("<ul>"));
    assert!(out.contains("<li>一</li>"));
    assert!(out.contains("<li>二</li>"));
}

#[test]
fn render_html_strips_raw_html() {
    let out = render_html("本文 <script>alert(1)</script>\n\n<div onclick=\"x\">block</div>\n");
    assert!(!out.contains("<script>"));
    assert!(!out.contains("<div"));
    assert!(out.contains("本文"));
}

#[test]
fn privacy_has_six_numbered_sections() {
    let doc = privacy();
    assert_eq!(doc.kind, ModalKind::Privacy);
    assert_eq!(doc.title, "プライバシーポリシー");
    let html = doc.html();
    assert_eq!(html.matches("<h4>").count(), 6);
    assert!(html.contains("<h4>1. 取得する情報</h4>"));
    assert!(html.contains("<h4>6. お問い合わせ</h4>"));
    assert!(html.contains("<li>メールアドレス</li>"));
}

#[test]
fn terms_have_eight_articles() {
    let doc = terms();
    assert_eq!(doc.kind, ModalKind::Terms);
    assert_eq!(doc.title, "利用規約");
    let html = doc.html();
    assert_eq!(html.matches("<h4>").count(), 8);
    for n in 1..=8 {
        assert!(html.contains(&format!("<h4>第{n}条")), "missing article {n}");
    }
    assert!(html.contains("25,000円（税別）"));
    assert!(html.contains("<li>売り場2店舗へのヒアリング</li>"));
    assert!(html.contains("<em>"));
}

#[test]
fn for_kind_selects_matching_document() {
    assert_eq!(for_kind(ModalKind::Privacy).title, privacy().title);
    assert_eq!(for_kind(ModalKind::Terms).title, terms().title);
}
