//! 固定模式检测器
use regex::Regex;

use crate::findings::Finding;

/// 损坏样式模式：双引号 style 属性内部又嵌套了未转义的双引号 url("images/….webp")。
/// 仅针对 .webp 引用；其他扩展名视为已是合法写法，不做泛化。
pub(crate) const BROKEN_STYLE_PATTERN: &str = r#"style="[^"]*url\("images/.*?\.webp"\)[^"]*""#;

/// 编译后的检测器（单模式）
pub(crate) struct Detector {
    pattern: Regex,
}

impl Detector {
    /// 编译固定模式；模式为编译期常量，构建失败属于程序缺陷
    pub(crate) fn new() -> Self {
        let pattern = Regex::new(BROKEN_STYLE_PATTERN).expect("compile broken-style pattern");
        Self { pattern }
    }

    /// 在整段文本上查找全部不重叠命中
    /// - 从左到右扫描，每次命中后从命中末尾继续，已消费的字符不会被复用
    /// - 返回顺序即文档顺序（start_offset 升序）
    pub(crate) fn find_all(&self, content: &str) -> Vec<Finding> {
        self.pattern
            .find_iter(content)
            .map(|m| Finding { value: m.as_str().to_string(), start_offset: m.start() })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_all(content: &str) -> Vec<Finding> {
        Detector::new().find_all(content)
    }

    #[test]
    fn finds_single_broken_pattern() {
        let content = r#"<div style="background:url("images/x.webp")">"#;
        let findings = find_all(content);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].value, r#"style="background:url("images/x.webp")""#);
        assert_eq!(findings[0].start_offset, 5);
    }

    #[test]
    fn reports_matches_in_document_order() {
        let content = concat!(
            r#"<a style="background:url("images/one.webp")">"#,
            "\n",
            r#"<b style="background:url("images/two.webp")">"#,
        );
        let findings = find_all(content);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].value.contains("one.webp"));
        assert!(findings[1].value.contains("two.webp"));
        assert!(findings[0].start_offset < findings[1].start_offset);
    }

    #[test]
    fn adjacent_patterns_are_both_found() {
        // 两个完整片段零间隔相邻，互不共享字符，必须都命中
        let content = concat!(
            r#"style="a:url("images/a.webp")""#,
            r#"style="b:url("images/b.webp")""#,
        );
        let findings = find_all(content);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[1].start_offset, findings[0].value.len());
    }

    #[test]
    fn overlapping_candidates_yield_single_match() {
        // 第二个 url(…) 落在首个命中的跨度内，扫描从命中末尾继续，不得复用字符
        let content = r#"style="a:url("images/b.webp") url("images/c.webp")""#;
        let findings = find_all(content);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn non_webp_url_is_not_counted() {
        let content = r#"<div style="background:url("images/x.png")">"#;
        assert!(find_all(content).is_empty());
    }

    #[test]
    fn well_formed_style_is_not_counted() {
        // 单引号嵌套是合法写法，不属于损坏模式
        let content = r#"<div style="background:url('images/x.webp')">"#;
        assert!(find_all(content).is_empty());
    }

    #[test]
    fn empty_content_yields_no_matches() {
        assert!(find_all("").is_empty());
    }
}
