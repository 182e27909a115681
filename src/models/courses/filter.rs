//! 课程可见性过滤谓词
//!
//! 由服务层根据查看者身份构造，交给存储层对课程集合求值。
//! 各访问授权分支作为有序谓词列表短路求值。

use regex::{Regex, RegexBuilder};

use crate::models::courses::entities::Course;

/// 标题搜索条件
///
/// 长度 >= 2 的搜索串在标题任意位置做大小写不敏感匹配，
/// 单字符搜索串只做标题前缀匹配。
#[derive(Debug, Clone)]
pub struct TitleQuery {
    pattern: Regex,
}

impl TitleQuery {
    /// 由原始搜索串构造，空串返回 None
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let escaped = regex::escape(trimmed);
        let source = if trimmed.chars().count() < 2 {
            format!("^{escaped}")
        } else {
            escaped
        };
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .expect("escaped search pattern is always a valid regex");

        Some(Self { pattern })
    }

    pub fn matches(&self, title: &str) -> bool {
        self.pattern.is_match(title)
    }
}

/// 查看者视角下的课程过滤谓词
#[derive(Debug, Clone)]
pub struct CourseFilter {
    // 持有"查看隐藏课程"权限且未显式指定分组过滤时为 true，匹配全部
    pub match_all: bool,
    pub viewer_id: i64,
    pub viewer_groups: Vec<String>,
    // 显式分组过滤
    pub group: Option<String>,
    pub title: Option<TitleQuery>,
}

type GrantCheck = fn(&CourseFilter, &Course) -> bool;

// 访问授权分支，按序短路求值
const GRANTS: &[GrantCheck] = &[
    is_owner,
    is_maintainer,
    is_teacher,
    shares_group,
    is_public,
    matches_group_filter,
];

fn is_owner(filter: &CourseFilter, course: &Course) -> bool {
    course.owner_id == filter.viewer_id
}

fn is_maintainer(filter: &CourseFilter, course: &Course) -> bool {
    course.maintainer_ids.contains(&filter.viewer_id)
}

fn is_teacher(filter: &CourseFilter, course: &Course) -> bool {
    course.teacher_ids.contains(&filter.viewer_id)
}

fn shares_group(filter: &CourseFilter, course: &Course) -> bool {
    course
        .assigned_groups
        .iter()
        .any(|g| filter.viewer_groups.contains(g))
}

// 空的指定分组集合表示完全公开，与查看者自身分组无关
fn is_public(_filter: &CourseFilter, course: &Course) -> bool {
    course.assigned_groups.is_empty()
}

fn matches_group_filter(filter: &CourseFilter, course: &Course) -> bool {
    match &filter.group {
        Some(group) => {
            course.assigned_groups.contains(group) || course.legacy_classes.contains(group)
        }
        None => false,
    }
}

impl CourseFilter {
    /// 课程是否匹配此过滤器（可见性与标题搜索的合取）
    pub fn matches(&self, course: &Course) -> bool {
        if !self.visible(course) {
            return false;
        }
        match &self.title {
            Some(query) => query.matches(&course.title),
            None => true,
        }
    }

    fn visible(&self, course: &Course) -> bool {
        if self.match_all {
            return true;
        }
        GRANTS.iter().any(|grant| grant(self, course))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::entities::Course;

    fn sample_course(owner_id: i64, groups: &[&str]) -> Course {
        let begin = chrono::Utc::now();
        Course {
            id: 1,
            domain_id: "system".to_string(),
            title: "Rust 程序设计".to_string(),
            content: String::new(),
            begin_at: begin,
            end_at: begin + chrono::Duration::days(30),
            owner_id,
            maintainer_ids: vec![],
            teacher_ids: vec![],
            assigned_groups: groups.iter().map(|s| s.to_string()).collect(),
            legacy_classes: vec![],
            problem_ids: vec![],
            attend_count: 0,
            attachments: vec![],
            created_at: begin,
            updated_at: begin,
        }
    }

    fn viewer_filter(viewer_id: i64, groups: &[&str]) -> CourseFilter {
        CourseFilter {
            match_all: false,
            viewer_id,
            viewer_groups: groups.iter().map(|s| s.to_string()).collect(),
            group: None,
            title: None,
        }
    }

    #[test]
    fn test_no_grant_no_match() {
        // 非 owner/maintainer/teacher、无共同分组、分组集合非空：不可见
        let course = sample_course(1, &["class-a"]);
        let filter = viewer_filter(2, &["class-b"]);
        assert!(!filter.matches(&course));
    }

    #[test]
    fn test_owner_always_visible() {
        let course = sample_course(1, &["class-a"]);
        let filter = viewer_filter(1, &[]);
        assert!(filter.matches(&course));
    }

    #[test]
    fn test_maintainer_and_teacher_visible() {
        let mut course = sample_course(1, &["class-a"]);
        course.maintainer_ids = vec![5];
        course.teacher_ids = vec![6];
        assert!(viewer_filter(5, &[]).matches(&course));
        assert!(viewer_filter(6, &[]).matches(&course));
    }

    #[test]
    fn test_shared_group_visible() {
        let course = sample_course(1, &["class-a", "class-b"]);
        let filter = viewer_filter(2, &["class-b"]);
        assert!(filter.matches(&course));
    }

    #[test]
    fn test_empty_group_set_is_public() {
        // 指定分组为空的课程对无任何分组的查看者同样可见
        let course = sample_course(1, &[]);
        let filter = viewer_filter(2, &[]);
        assert!(filter.matches(&course));
    }

    #[test]
    fn test_group_filter_matches_legacy_classes() {
        let mut course = sample_course(1, &["class-a"]);
        course.legacy_classes = vec!["2019-spring".to_string()];
        let mut filter = viewer_filter(2, &[]);
        filter.group = Some("2019-spring".to_string());
        assert!(filter.matches(&course));

        filter.group = Some("2020-spring".to_string());
        assert!(!filter.matches(&course));
    }

    #[test]
    fn test_match_all_bypass() {
        let course = sample_course(1, &["class-a"]);
        let mut filter = viewer_filter(2, &[]);
        filter.match_all = true;
        assert!(filter.matches(&course));
    }

    #[test]
    fn test_title_substring_case_insensitive() {
        let course = sample_course(1, &[]);
        let mut filter = viewer_filter(2, &[]);
        filter.title = TitleQuery::new("rust");
        assert!(filter.matches(&course));

        filter.title = TitleQuery::new("RUST");
        assert!(filter.matches(&course));

        filter.title = TitleQuery::new("python");
        assert!(!filter.matches(&course));
    }

    #[test]
    fn test_single_char_query_is_prefix_only() {
        let course = sample_course(1, &[]);
        let mut filter = viewer_filter(2, &[]);
        // "R" 是标题前缀，匹配
        filter.title = TitleQuery::new("r");
        assert!(filter.matches(&course));
        // "u" 出现在标题中间，单字符只做前缀匹配
        filter.title = TitleQuery::new("u");
        assert!(!filter.matches(&course));
    }

    #[test]
    fn test_title_query_escapes_metacharacters() {
        let mut course = sample_course(1, &[]);
        course.title = "C++ (advanced)".to_string();
        let mut filter = viewer_filter(2, &[]);
        filter.title = TitleQuery::new("c++");
        assert!(filter.matches(&course));
    }

    #[test]
    fn test_blank_query_is_none() {
        assert!(TitleQuery::new("   ").is_none());
    }
}
