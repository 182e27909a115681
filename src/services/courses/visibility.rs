//! 可见性过滤谓词构造

use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::filter::{CourseFilter, TitleQuery};
use crate::models::courses::requests::CourseListQuery;
use crate::models::users::entities::Viewer;
use crate::storage::UserDirectory;

/// 根据查看者身份与查询参数构造课程过滤谓词
///
/// 持有"查看隐藏课程"权限且未显式指定分组过滤时直接匹配全部；
/// 否则按 owner / maintainer / teacher / 分组交集 / 公开 /
/// 显式分组过滤的授权分支求值。
pub fn build_course_filter(viewer: &Viewer, query: &CourseListQuery) -> CourseFilter {
    let group = query
        .group
        .as_ref()
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .map(|g| g.to_string());

    let title = query.search.as_deref().and_then(TitleQuery::new);

    CourseFilter {
        match_all: viewer.can_view_hidden && group.is_none(),
        viewer_id: viewer.user_id,
        viewer_groups: viewer.groups.clone(),
        group,
        title,
    }
}

/// 从身份服务解析查看者
///
/// 供宿主平台在鉴权层之后构造 `Viewer` 使用。
pub async fn resolve_viewer(
    directory: &Arc<dyn UserDirectory>,
    domain_id: &str,
    user_id: i64,
    can_view_hidden: bool,
) -> Result<Viewer> {
    let groups = directory.get_user_groups(domain_id, user_id).await?;
    Ok(Viewer {
        user_id,
        groups,
        can_view_hidden,
    })
}
