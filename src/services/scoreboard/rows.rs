use std::collections::HashMap;

use super::ScoreboardService;
use crate::errors::Result;
use crate::models::scoreboard::responses::{ScoreboardCell, ScoreboardRow, ScoreboardResponse};
use crate::models::users::entities::{UserSummary, Viewer};
use crate::services::courses::get::find_visible_course;

/// 生成课程排行榜
///
/// 纯只读归约：每行按课程当前题目列表取生效得分，
/// 总分降序排序；稳定排序保证同分行保持报名列表顺序。
pub async fn scoreboard(
    service: &ScoreboardService,
    domain_id: &str,
    course_id: i64,
    viewer: &Viewer,
) -> Result<ScoreboardResponse> {
    let course = find_visible_course(service.store(), domain_id, course_id, viewer).await?;
    let enrollments = service.store().list_enrollments(domain_id, course_id).await?;

    // 表头列必须与单元格同序，隐藏题目此处不过滤
    let problems = service
        .catalog()
        .get_problem_summaries(domain_id, &course.problem_ids, true)
        .await?;

    let user_ids: Vec<i64> = enrollments.iter().map(|e| e.user_id).collect();
    let summaries: HashMap<i64, UserSummary> = service
        .directory()
        .get_user_summaries(&user_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let mut rows: Vec<ScoreboardRow> = enrollments
        .iter()
        .map(|enrollment| {
            let cells: Vec<ScoreboardCell> = course
                .problem_ids
                .iter()
                .map(|&problem_id| ScoreboardCell {
                    problem_id,
                    score: enrollment
                        .effective_entry(problem_id)
                        .map(|e| e.score)
                        .unwrap_or(0),
                })
                .collect();
            let total_score = cells.iter().map(|c| c.score as i64).sum();

            ScoreboardRow {
                user: summaries
                    .get(&enrollment.user_id)
                    .cloned()
                    .unwrap_or_else(|| UserSummary::placeholder(enrollment.user_id)),
                total_score,
                cells,
            }
        })
        .collect();

    // 稳定排序，仅比较总分，同分保持报名列表顺序
    rows.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    Ok(ScoreboardResponse { problems, rows })
}
