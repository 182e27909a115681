//! 报名状态子集合存储操作

use dashmap::mapref::entry::Entry;

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::enrollments::entities::{Enrollment, JournalEntry};

impl MemoryStorage {
    /// 获取单个学生的报名状态
    pub(crate) async fn get_enrollment_impl(
        &self,
        domain_id: &str,
        course_id: i64,
        user_id: i64,
    ) -> Result<Option<Enrollment>> {
        Ok(self
            .enrollments
            .get(&(domain_id.to_string(), course_id, user_id))
            .map(|e| e.clone()))
    }

    /// 列出已报名学生，按报名时间升序、用户ID升序
    pub(crate) async fn list_enrollments_impl(
        &self,
        domain_id: &str,
        course_id: i64,
    ) -> Result<Vec<Enrollment>> {
        let mut enrolled: Vec<Enrollment> = self
            .enrollments
            .iter()
            .filter(|entry| {
                let (domain, course, _) = entry.key();
                domain == domain_id && *course == course_id && entry.value().attend
            })
            .map(|entry| entry.value().clone())
            .collect();

        enrolled.sort_by(|a, b| a.enroll_at.cmp(&b.enroll_at).then(a.user_id.cmp(&b.user_id)));

        Ok(enrolled)
    }

    /// 条件置位报名标志
    ///
    /// entry API 持有分片锁，检查与置位对并发调用原子，
    /// 同一 (课程, 用户) 至多一次成功。
    pub(crate) async fn set_attend_if_absent_impl(
        &self,
        domain_id: &str,
        course_id: i64,
        user_id: i64,
        enroll_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<bool> {
        let key = (domain_id.to_string(), course_id, user_id);
        match self.enrollments.entry(key) {
            Entry::Occupied(mut occupied) => {
                let enrollment = occupied.get_mut();
                if enrollment.attend {
                    return Ok(false);
                }
                enrollment.attend = true;
                enrollment.enroll_at = Some(enroll_at);
                Ok(true)
            }
            Entry::Vacant(vacant) => {
                let mut enrollment = Enrollment::new(domain_id, course_id, user_id);
                enrollment.attend = true;
                enrollment.enroll_at = Some(enroll_at);
                vacant.insert(enrollment);
                Ok(true)
            }
        }
    }

    /// 追加进度日志条目
    pub(crate) async fn append_journal_impl(
        &self,
        domain_id: &str,
        course_id: i64,
        user_id: i64,
        entry: JournalEntry,
    ) -> Result<()> {
        let key = (domain_id.to_string(), course_id, user_id);
        self.enrollments
            .entry(key)
            .or_insert_with(|| Enrollment::new(domain_id, course_id, user_id))
            .journal
            .push(entry);
        Ok(())
    }

    /// 级联删除课程的全部报名记录
    pub(crate) async fn delete_course_enrollments_impl(
        &self,
        domain_id: &str,
        course_id: i64,
    ) -> Result<u64> {
        let mut removed = 0u64;
        self.enrollments.retain(|(domain, course, _), _| {
            let matches = domain == domain_id && *course == course_id;
            if matches {
                removed += 1;
            }
            !matches
        });
        Ok(removed)
    }
}
