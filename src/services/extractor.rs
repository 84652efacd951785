//! 正文提取服务 - 业务能力层
//!
//! 只负责"从 HTML 中找出正文"能力，不关心长度是否足够

use crate::utils::normalize_whitespace;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

/// 不计入可见文本的标签
///
/// `form` 不在其中：不少站点用一个表单包住整个页面主体
const NOISE_TAGS: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "aside", "iframe", "svg",
    "template", "button", "input", "select", "textarea",
];

/// 前后需要补空格的块级标签
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "main", "br", "li", "ul", "ol", "dl", "dt", "dd", "table",
    "tr", "td", "th", "blockquote", "pre", "h1", "h2", "h3", "h4", "h5", "h6", "figure",
    "figcaption", "form",
];

/// 参与打分的段落类标签
const PARAGRAPH_SELECTOR: &str = "p, pre, blockquote, td";

/// 段落最少可见字符数
const MIN_PARAGRAPH_CHARS: usize = 25;

static POSITIVE_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)article|body|content|entry|main|page|post|text|blog|story").expect("POSITIVE_HINT should compile")
});
static NEGATIVE_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)comment|footer|footnote|masthead|meta|nav|sidebar|sponsor|share|advert|promo|related|menu|banner|social|widget|\bads?\b")
        .expect("NEGATIVE_HINT should compile")
});

/// 候选正文块
struct Candidate<'a> {
    element: ElementRef<'a>,
    score: f64,
}

/// 正文提取服务
///
/// 职责：
/// - 对段落打分并向父/祖父节点累加，选出得分最高的块
/// - 没有明确候选时按 article → main → body → 整个文档 逐级放宽
/// - 提取失败返回空字符串，长度校验交给流程层
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentExtractor;

impl ContentExtractor {
    pub fn new() -> Self {
        Self
    }

    /// 提取正文并归一化空白
    pub fn extract(&self, html: &str) -> String {
        let document = Html::parse_document(html);

        let text = match best_candidate(&document) {
            Some(candidate) => {
                debug!(
                    "选中候选块 <{}>，得分 {:.2}",
                    candidate.element.value().name(),
                    candidate.score
                );
                visible_text(candidate.element)
            }
            None => {
                debug!("没有明确的候选块，使用兜底选择");
                fallback_container(&document)
                    .map(visible_text)
                    .unwrap_or_default()
            }
        };

        normalize_whitespace(&text)
    }
}

/// 段落打分并选出得分最高的候选块
fn best_candidate(document: &Html) -> Option<Candidate<'_>> {
    let paragraph_selector = Selector::parse(PARAGRAPH_SELECTOR).ok()?;
    let mut candidates: HashMap<_, Candidate<'_>> = HashMap::new();

    for paragraph in document.select(&paragraph_selector) {
        if has_noise_ancestor(paragraph) {
            continue;
        }

        let text = normalize_whitespace(&visible_text(paragraph));
        let length = text.chars().count();
        if length < MIN_PARAGRAPH_CHARS {
            continue;
        }

        let content_score = 1.0 + text.matches(',').count() as f64 + (length as f64 / 100.0).min(3.0);

        let parent = paragraph.parent().and_then(ElementRef::wrap);
        let grandparent = parent.and_then(|p| p.parent()).and_then(ElementRef::wrap);

        for (ancestor, share) in [(parent, 1.0), (grandparent, 0.5)] {
            let Some(ancestor) = ancestor else { continue };
            candidates
                .entry((*ancestor).id())
                .or_insert_with(|| Candidate {
                    element: ancestor,
                    score: initial_score(ancestor),
                })
                .score += content_score * share;
        }
    }

    candidates
        .into_values()
        .map(|mut c| {
            c.score *= 1.0 - link_density(c.element);
            c
        })
        .filter(|c| c.score > 0.0)
        .max_by(|a, b| a.score.total_cmp(&b.score))
}

/// 兜底：article → main → body → 整个文档
fn fallback_container(document: &Html) -> Option<ElementRef<'_>> {
    ["article", "main, [role='main']", "body"]
        .iter()
        .find_map(|selector| first_match(document, selector))
        .or_else(|| Some(document.root_element()))
}

fn first_match<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

/// 标签和 class/id 带来的初始分
fn initial_score(element: ElementRef<'_>) -> f64 {
    let tag_score = match element.value().name() {
        "article" => 10.0,
        "main" => 8.0,
        "div" => 5.0,
        "section" => 3.0,
        "pre" | "td" | "blockquote" => 3.0,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form" => -3.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => -5.0,
        _ => 0.0,
    };
    tag_score + class_weight(element)
}

fn class_weight(element: ElementRef<'_>) -> f64 {
    let value = element.value();
    let mut weight = 0.0;
    for hint in [value.attr("class"), value.attr("id")].into_iter().flatten() {
        if NEGATIVE_HINT.is_match(hint) {
            weight -= 25.0;
        }
        if POSITIVE_HINT.is_match(hint) {
            weight += 25.0;
        }
    }
    weight
}

/// 链接文本占可见文本的比例，噪声标签里的链接两边都不计
fn link_density(element: ElementRef<'_>) -> f64 {
    let total = visible_text(element).chars().filter(|c| !c.is_whitespace()).count();
    if total == 0 {
        return 0.0;
    }

    let Ok(link_selector) = Selector::parse("a") else {
        return 0.0;
    };
    let linked: usize = element
        .select(&link_selector)
        .filter(|a| !has_noise_ancestor_within(*a, element))
        .map(|a| visible_text(a).chars().filter(|c| !c.is_whitespace()).count())
        .sum();

    (linked as f64 / total as f64).min(1.0)
}

fn is_noise(element: ElementRef<'_>) -> bool {
    NOISE_TAGS.contains(&element.value().name())
}

fn has_noise_ancestor(element: ElementRef<'_>) -> bool {
    element.ancestors().filter_map(ElementRef::wrap).any(is_noise)
}

/// 只检查 `root` 以内的祖先
fn has_noise_ancestor_within(element: ElementRef<'_>, root: ElementRef<'_>) -> bool {
    let root_id = (*root).id();
    element
        .ancestors()
        .take_while(|node| node.id() != root_id)
        .filter_map(ElementRef::wrap)
        .any(is_noise)
}

/// 元素的可见文本（跳过脚本、导航等噪声标签）
fn visible_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if is_noise(child_element) {
                continue;
            }
            // 块级元素之间补空格，避免相邻段落粘连
            let block = BLOCK_TAGS.contains(&child_element.value().name());
            if block {
                out.push(' ');
            }
            collect_text(child_element, out);
            if block {
                out.push(' ');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOG_PAGE: &str = r#"
        <!DOCTYPE html>
        <html>
        <head><title>Hooks</title><style>body { color: red; }</style></head>
        <body>
            <header><a href="/">Home</a> <a href="/about">About</a></header>
            <nav class="menu"><a href="/a">Archive</a></nav>
            <div class="post-content">
                <p>React hooks let you use state and other features without writing a class, which keeps components small.</p>
                <p>Custom hooks make it easier to share logic between different components, and they compose well.</p>
                <script>trackPageView();</script>
            </div>
            <div class="sidebar">
                <p><a href="/1">Related post number one</a> <a href="/2">Related post number two</a></p>
            </div>
            <footer>Copyright 2024, all rights reserved by the author of this blog.</footer>
        </body>
        </html>
    "#;

    #[test]
    fn test_extracts_article_paragraphs() {
        let html = "<article><p>React is a library. It simplifies development. You can use it with hooks. Extra sentence ignored.</p></article>";
        let text = ContentExtractor::new().extract(html);
        assert_eq!(
            text,
            "React is a library. It simplifies development. You can use it with hooks. Extra sentence ignored."
        );
    }

    #[test]
    fn test_prefers_dense_content_over_boilerplate() {
        let text = ContentExtractor::new().extract(BLOG_PAGE);
        assert!(text.starts_with("React hooks let you use state"));
        assert!(text.contains("share logic between different components"));
        assert!(!text.contains("trackPageView"));
        assert!(!text.contains("Related post"));
        assert!(!text.contains("Copyright"));
        assert!(!text.contains("Archive"));
    }

    #[test]
    fn test_fallback_to_main_without_paragraphs() {
        let html = r#"
            <html><body>
                <nav>Navigation links</nav>
                <main><div>Short lines</div><div>only in divs</div></main>
            </body></html>
        "#;
        let text = ContentExtractor::new().extract(html);
        assert_eq!(text, "Short lines only in divs");
    }

    #[test]
    fn test_fallback_to_body_strips_noise() {
        let html = "<html><body><script>var x = 1;</script><span>Tiny page</span></body></html>";
        let text = ContentExtractor::new().extract(html);
        assert_eq!(text, "Tiny page");
    }

    #[test]
    fn test_empty_markup_yields_empty_string() {
        assert_eq!(ContentExtractor::new().extract(""), "");
        assert_eq!(ContentExtractor::new().extract("<html><body></body></html>"), "");
    }

    #[test]
    fn test_link_heavy_block_loses() {
        let html = r#"
            <body>
                <div id="links">
                    <p><a href="/x">A very long list of links that goes on and on and on</a></p>
                    <p><a href="/y">Another very long list of links that goes on and on</a></p>
                </div>
                <section>
                    <p>The actual prose of the page lives here and is not wrapped in links at all.</p>
                </section>
            </body>
        "#;
        let text = ContentExtractor::new().extract(html);
        assert_eq!(
            text,
            "The actual prose of the page lives here and is not wrapped in links at all."
        );
    }

    #[test]
    fn test_inline_markup_does_not_split_words() {
        let html = "<article><p>Use <em>hooks</em>, <a href=\"/x\">they</a> simplify <b>state</b>.</p><p>Second paragraph</p></article>";
        let text = ContentExtractor::new().extract(html);
        assert_eq!(text, "Use hooks, they simplify state. Second paragraph");
    }

    #[test]
    fn test_form_wrapped_page_keeps_content() {
        let html = r#"
            <html><body>
                <form id="aspnetForm" method="post">
                    <input type="hidden" name="__VIEWSTATE" value="dDwtMTA4MTY1NzE5Nzs7Pg==">
                    <div class="post-content">
                        <p>React hooks let you use state and other features without writing a class, which keeps components small.</p>
                        <p>Custom hooks make it easier to share logic between different components, and they compose well.</p>
                    </div>
                    <button type="submit">Subscribe</button>
                </form>
            </body></html>
        "#;
        let text = ContentExtractor::new().extract(html);
        assert_eq!(
            text,
            "React hooks let you use state and other features without writing a class, which keeps components small. \
             Custom hooks make it easier to share logic between different components, and they compose well."
        );
    }

    #[test]
    fn test_form_wrapped_body_fallback() {
        let html = r#"<html><body><form id="aspnetForm"><span>Short lines</span> <span>inside a page form</span><select><option>EN</option></select></form></body></html>"#;
        let text = ContentExtractor::new().extract(html);
        assert_eq!(text, "Short lines inside a page form");
    }

    #[test]
    fn test_nav_links_inside_article_do_not_count() {
        let html = r#"
            <html><body>
                <article>
                    <nav>
                        <a href="/archive">Browse every archived post from this year and the last</a>
                        <a href="/tags">See all of the tags used across the whole blog</a>
                        <a href="/authors">Meet every author who has written for this site</a>
                    </nav>
                    <p>This short article paragraph holds the actual content of the page.</p>
                </article>
                <div class="sidebar">
                    <p>Sidebar blurb that is long enough to be scored as a paragraph here.</p>
                </div>
            </body></html>
        "#;
        let text = ContentExtractor::new().extract(html);
        assert_eq!(text, "This short article paragraph holds the actual content of the page.");
    }
}
