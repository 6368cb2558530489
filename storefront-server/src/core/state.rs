use std::sync::Arc;

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use shared::preferences::{Favorites, FollowStore};
use shared::storage::KeyValueStore;

use crate::catalog::{Catalog, seed};
use crate::core::Config;
use crate::db::RedbStore;
use crate::utils::time::local_now;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一份。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<Catalog> | 商家目录 (只读) |
/// | favorites | Arc<Favorites> | 收藏 |
/// | follows | Arc<FollowStore> | 关注 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub favorites: Arc<Favorites>,
    pub follows: Arc<FollowStore>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 1. 确保工作目录存在
    /// 2. 打开 redb 数据库
    /// 3. 加载商家目录
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let db_path = config.database_path();
        let store = RedbStore::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Preference database opened");

        let catalog = Catalog::load(config.catalog_path.as_deref())?;
        Self::with_parts(config.clone(), catalog, Arc::new(store))
    }

    /// Assemble state from already opened parts (tests use an in-memory store)
    pub fn with_parts(
        config: Config,
        catalog: Catalog,
        store: Arc<dyn KeyValueStore>,
    ) -> anyhow::Result<Self> {
        let favorites = Favorites::new(store.clone());
        let follows = FollowStore::open(store, seed::follow_map())?;
        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            favorites: Arc::new(favorites),
            follows: Arc::new(follows),
        })
    }

    pub fn timezone(&self) -> Tz {
        self.config.timezone
    }

    /// 当前本地时间 (配置的时区)
    pub fn now(&self) -> NaiveDateTime {
        local_now(self.config.timezone)
    }
}
