//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::faculty::{ActiveModel, Column, Entity as FacultyMembers};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    faculty::{
        entities::{Faculty, FacultyStatus},
        requests::{CreateFacultyRequest, FacultyListQuery, UpdateFacultyRequest},
        responses::FacultyListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_faculty_impl(&self, req: CreateFacultyRequest) -> Result<Faculty> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            full_name: Set(req.full_name),
            email: Set(req.email),
            faculty_id: Set(req.faculty_id),
            department: Set(req.department),
            qualification: Set(req.qualification),
            status: Set(req.status.unwrap_or(FacultyStatus::Active).to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_faculty())
    }

    /// 通过 ID 获取教师
    pub async fn get_faculty_by_id_impl(&self, id: i64) -> Result<Option<Faculty>> {
        let result = FacultyMembers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_faculty()))
    }

    /// 分页列出教师
    pub async fn list_faculty_with_pagination_impl(
        &self,
        query: FacultyListQuery,
    ) -> Result<FacultyListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = FacultyMembers::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.contains(&escaped))
                    .add(Column::Email.contains(&escaped))
                    .add(Column::FacultyId.contains(&escaped)),
            );
        }

        // 院系筛选
        if let Some(ref department) = query.department
            && !department.eq_ignore_ascii_case("all")
        {
            select = select.filter(Column::Department.eq(department.as_str()));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师页数失败: {e}")))?;

        let members = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(FacultyListResponse {
            items: members.into_iter().map(|m| m.into_faculty()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出全部教师
    pub async fn list_all_faculty_impl(&self) -> Result<Vec<Faculty>> {
        let members = FacultyMembers::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(members.into_iter().map(|m| m.into_faculty()).collect())
    }

    /// 更新教师信息
    pub async fn update_faculty_impl(
        &self,
        id: i64,
        update: UpdateFacultyRequest,
    ) -> Result<Option<Faculty>> {
        if self.get_faculty_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        if let Some(qualification) = update.qualification {
            model.qualification = Set(Some(qualification));
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新教师失败: {e}")))?;

        self.get_faculty_by_id_impl(id).await
    }

    /// 删除教师
    pub async fn delete_faculty_impl(&self, id: i64) -> Result<bool> {
        let result = FacultyMembers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
