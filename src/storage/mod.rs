use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{
    evaluations::{
        entities::Evaluation,
        requests::{CreateEvaluationRequest, UpdateEvaluationRequest},
    },
    payments::{
        entities::Payment,
        requests::{CreatePaymentRequest, UpdatePaymentRequest},
    },
    permissions::Permission,
    rooms::{
        entities::Room,
        requests::{CreateRoomRequest, UpdateRoomRequest},
    },
    schedules::{
        entities::ScheduleEntry,
        requests::{CreateScheduleRequest, UpdateScheduleRequest},
    },
    schools::{
        entities::School,
        requests::{CreateSchoolRequest, UpdateSchoolRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, UpdateTeacherRequest},
    },
    users::entities::{NewUser, User, UserRole, UserStatus},
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 账号信息更新（密码另行处理）
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub status: Option<UserStatus>,
}

/// 列表接口的租户范围；`None` 表示跨租户（仅超级管理员）
pub type SchoolFilter = Option<i64>;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学校管理方法
    // 创建学校，可选地在同一事务中创建学校管理员
    async fn create_school(
        &self,
        school: CreateSchoolRequest,
        admin: Option<NewUser>,
    ) -> Result<(School, Option<User>)>;
    async fn get_school_by_id(&self, id: i64) -> Result<Option<School>>;
    async fn list_schools(&self, school: SchoolFilter) -> Result<Vec<School>>;
    async fn update_school(&self, id: i64, update: UpdateSchoolRequest) -> Result<Option<School>>;
    async fn delete_school(&self, id: i64) -> Result<bool>;

    /// 用户管理方法
    async fn create_user(&self, user: NewUser) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 按角色列出用户
    async fn list_users_by_role(&self, school: SchoolFilter, role: UserRole) -> Result<Vec<User>>;
    async fn update_user(&self, id: i64, update: UserUpdate) -> Result<Option<User>>;
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 员工授权方法
    // 在同一事务中创建员工账号及其授权
    async fn create_staff(
        &self,
        user: NewUser,
        permissions: &[Permission],
    ) -> Result<(User, Vec<Permission>)>;
    async fn list_staff_permissions(&self, user_id: i64) -> Result<Vec<Permission>>;
    // 按用户分组的学校内全部授权
    async fn list_school_staff_permissions(
        &self,
        school: SchoolFilter,
    ) -> Result<HashMap<i64, Vec<Permission>>>;
    // 整体替换授权
    async fn replace_staff_permissions(
        &self,
        user_id: i64,
        school_id: i64,
        permissions: &[Permission],
    ) -> Result<Vec<Permission>>;

    /// 教师管理方法
    // 在同一事务中创建登录账号与教师档案
    async fn create_teacher(
        &self,
        school_id: i64,
        teacher: CreateTeacherRequest,
        account: NewUser,
    ) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn list_teachers(&self, school: SchoolFilter) -> Result<Vec<Teacher>>;
    async fn update_teacher(&self, id: i64, update: UpdateTeacherRequest)
    -> Result<Option<Teacher>>;
    // 删除教师及其登录账号
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, school_id: i64, student: CreateStudentRequest)
    -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn list_students(&self, school: SchoolFilter) -> Result<Vec<Student>>;
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教室管理方法
    async fn create_room(&self, school_id: i64, room: CreateRoomRequest) -> Result<Room>;
    async fn get_room_by_id(&self, id: i64) -> Result<Option<Room>>;
    async fn list_rooms(&self, school: SchoolFilter) -> Result<Vec<Room>>;
    async fn update_room(&self, id: i64, update: UpdateRoomRequest) -> Result<Option<Room>>;
    async fn delete_room(&self, id: i64) -> Result<bool>;

    /// 课表管理方法
    async fn create_schedule(
        &self,
        school_id: i64,
        entry: CreateScheduleRequest,
    ) -> Result<ScheduleEntry>;
    // 在同一事务中创建全部条目，任一失败则回滚
    async fn create_schedules_atomic(
        &self,
        school_id: i64,
        entries: Vec<CreateScheduleRequest>,
    ) -> Result<Vec<ScheduleEntry>>;
    async fn get_schedule_by_id(&self, id: i64) -> Result<Option<ScheduleEntry>>;
    async fn list_schedules(&self, school: SchoolFilter) -> Result<Vec<ScheduleEntry>>;
    async fn update_schedule(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<ScheduleEntry>>;
    async fn delete_schedule(&self, id: i64) -> Result<bool>;

    /// 缴费管理方法
    async fn create_payment(
        &self,
        school_id: i64,
        payment: CreatePaymentRequest,
        receipt_number: String,
    ) -> Result<Payment>;
    async fn get_payment_by_id(&self, id: i64) -> Result<Option<Payment>>;
    async fn list_payments(&self, school: SchoolFilter) -> Result<Vec<Payment>>;
    async fn update_payment(&self, id: i64, update: UpdatePaymentRequest)
    -> Result<Option<Payment>>;
    async fn delete_payment(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    async fn create_evaluation(
        &self,
        school_id: i64,
        evaluation: CreateEvaluationRequest,
    ) -> Result<Evaluation>;
    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<Evaluation>>;
    async fn list_evaluations(&self, school: SchoolFilter) -> Result<Vec<Evaluation>>;
    async fn update_evaluation(
        &self,
        id: i64,
        update: UpdateEvaluationRequest,
    ) -> Result<Option<Evaluation>>;
    async fn delete_evaluation(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
