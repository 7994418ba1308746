//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod evaluations;
mod payments;
mod rooms;
mod schedules;
mod schools;
mod staff;
mod students;
mod teachers;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{EcoleError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// 内存数据库 URL
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

/// 数据库错误转换，附带操作描述
pub(crate) fn db_error(action: &'static str) -> impl Fn(DbErr) -> EcoleError {
    move |e| EcoleError::database_operation(format!("{action}: {e}"))
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 按指定数据库配置连接并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url == IN_MEMORY_URL {
            Self::connect_sqlite_memory().await?
        } else if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EcoleError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 内存数据库（测试用）
    pub async fn in_memory() -> Result<Self> {
        Self::connect(&DatabaseConfig {
            url: IN_MEMORY_URL.to_string(),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EcoleError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EcoleError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 内存 SQLite：每个连接是独立的库，因此固定单连接且永不回收
    async fn connect_sqlite_memory() -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(IN_MEMORY_URL)
            .map_err(|e| EcoleError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .map_err(|e| EcoleError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EcoleError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url == ":memory:" || url == IN_MEMORY_URL {
            Ok(IN_MEMORY_URL.to_string())
        } else if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EcoleError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
    users::entities::{NewUser, User, UserRole},
};
use crate::storage::{SchoolFilter, Storage, UserUpdate};
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学校模块
    async fn create_school(
        &self,
        school: CreateSchoolRequest,
        admin: Option<NewUser>,
    ) -> Result<(School, Option<User>)> {
        self.create_school_impl(school, admin).await
    }

    async fn get_school_by_id(&self, id: i64) -> Result<Option<School>> {
        self.get_school_by_id_impl(id).await
    }

    async fn list_schools(&self, school: SchoolFilter) -> Result<Vec<School>> {
        self.list_schools_impl(school).await
    }

    async fn update_school(&self, id: i64, update: UpdateSchoolRequest) -> Result<Option<School>> {
        self.update_school_impl(id, update).await
    }

    async fn delete_school(&self, id: i64) -> Result<bool> {
        self.delete_school_impl(id).await
    }

    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_by_role(&self, school: SchoolFilter, role: UserRole) -> Result<Vec<User>> {
        self.list_users_by_role_impl(school, role).await
    }

    async fn update_user(&self, id: i64, update: UserUpdate) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 员工授权模块
    async fn create_staff(
        &self,
        user: NewUser,
        permissions: &[Permission],
    ) -> Result<(User, Vec<Permission>)> {
        self.create_staff_impl(user, permissions).await
    }

    async fn list_staff_permissions(&self, user_id: i64) -> Result<Vec<Permission>> {
        self.list_staff_permissions_impl(user_id).await
    }

    async fn list_school_staff_permissions(
        &self,
        school: SchoolFilter,
    ) -> Result<HashMap<i64, Vec<Permission>>> {
        self.list_school_staff_permissions_impl(school).await
    }

    async fn replace_staff_permissions(
        &self,
        user_id: i64,
        school_id: i64,
        permissions: &[Permission],
    ) -> Result<Vec<Permission>> {
        self.replace_staff_permissions_impl(user_id, school_id, permissions)
            .await
    }

    // 教师模块
    async fn create_teacher(
        &self,
        school_id: i64,
        teacher: CreateTeacherRequest,
        account: NewUser,
    ) -> Result<Teacher> {
        self.create_teacher_impl(school_id, teacher, account).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn list_teachers(&self, school: SchoolFilter) -> Result<Vec<Teacher>> {
        self.list_teachers_impl(school).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 学生模块
    async fn create_student(
        &self,
        school_id: i64,
        student: CreateStudentRequest,
    ) -> Result<Student> {
        self.create_student_impl(school_id, student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students(&self, school: SchoolFilter) -> Result<Vec<Student>> {
        self.list_students_impl(school).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 教室模块
    async fn create_room(&self, school_id: i64, room: CreateRoomRequest) -> Result<Room> {
        self.create_room_impl(school_id, room).await
    }

    async fn get_room_by_id(&self, id: i64) -> Result<Option<Room>> {
        self.get_room_by_id_impl(id).await
    }

    async fn list_rooms(&self, school: SchoolFilter) -> Result<Vec<Room>> {
        self.list_rooms_impl(school).await
    }

    async fn update_room(&self, id: i64, update: UpdateRoomRequest) -> Result<Option<Room>> {
        self.update_room_impl(id, update).await
    }

    async fn delete_room(&self, id: i64) -> Result<bool> {
        self.delete_room_impl(id).await
    }

    // 课表模块
    async fn create_schedule(
        &self,
        school_id: i64,
        entry: CreateScheduleRequest,
    ) -> Result<ScheduleEntry> {
        self.create_schedule_impl(school_id, entry).await
    }

    async fn create_schedules_atomic(
        &self,
        school_id: i64,
        entries: Vec<CreateScheduleRequest>,
    ) -> Result<Vec<ScheduleEntry>> {
        self.create_schedules_atomic_impl(school_id, entries).await
    }

    async fn get_schedule_by_id(&self, id: i64) -> Result<Option<ScheduleEntry>> {
        self.get_schedule_by_id_impl(id).await
    }

    async fn list_schedules(&self, school: SchoolFilter) -> Result<Vec<ScheduleEntry>> {
        self.list_schedules_impl(school).await
    }

    async fn update_schedule(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<ScheduleEntry>> {
        self.update_schedule_impl(id, update).await
    }

    async fn delete_schedule(&self, id: i64) -> Result<bool> {
        self.delete_schedule_impl(id).await
    }

    // 缴费模块
    async fn create_payment(
        &self,
        school_id: i64,
        payment: CreatePaymentRequest,
        receipt_number: String,
    ) -> Result<Payment> {
        self.create_payment_impl(school_id, payment, receipt_number)
            .await
    }

    async fn get_payment_by_id(&self, id: i64) -> Result<Option<Payment>> {
        self.get_payment_by_id_impl(id).await
    }

    async fn list_payments(&self, school: SchoolFilter) -> Result<Vec<Payment>> {
        self.list_payments_impl(school).await
    }

    async fn update_payment(
        &self,
        id: i64,
        update: UpdatePaymentRequest,
    ) -> Result<Option<Payment>> {
        self.update_payment_impl(id, update).await
    }

    async fn delete_payment(&self, id: i64) -> Result<bool> {
        self.delete_payment_impl(id).await
    }

    // 成绩模块
    async fn create_evaluation(
        &self,
        school_id: i64,
        evaluation: CreateEvaluationRequest,
    ) -> Result<Evaluation> {
        self.create_evaluation_impl(school_id, evaluation).await
    }

    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<Evaluation>> {
        self.get_evaluation_by_id_impl(id).await
    }

    async fn list_evaluations(&self, school: SchoolFilter) -> Result<Vec<Evaluation>> {
        self.list_evaluations_impl(school).await
    }

    async fn update_evaluation(
        &self,
        id: i64,
        update: UpdateEvaluationRequest,
    ) -> Result<Option<Evaluation>> {
        self.update_evaluation_impl(id, update).await
    }

    async fn delete_evaluation(&self, id: i64) -> Result<bool> {
        self.delete_evaluation_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("ecole.db").unwrap(),
            "sqlite://ecole.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            IN_MEMORY_URL
        );
        assert!(SeaOrmStorage::build_database_url("postgres://u@h/db").is_ok());
        assert!(SeaOrmStorage::build_database_url("ftp://nope").is_err());
    }
}
