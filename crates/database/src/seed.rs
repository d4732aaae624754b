use crate::models::ProjectInfo;
use crate::store::ShowcaseStore;
use crate::DatabaseResult;
use shared_lib::AppConfig;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// 创建数据存储并写入种子项目（一站式函数）
///
/// 配置了 `seed_path` 时从json文件加载项目列表，否则使用 [`default_catalog`]。
pub async fn initialize_store(config: &AppConfig) -> DatabaseResult<Arc<ShowcaseStore>> {
    let projects = match &config.seed_path {
        Some(path) => {
            info!("🌱 从 {} 加载种子数据", path.display());
            load_seed_file(path).await?
        }
        None => {
            info!("🌱 未配置 SEED_PATH，使用内置演示数据");
            default_catalog()
        }
    };

    let store = ShowcaseStore::new(projects)?;
    info!("✅ 数据存储初始化完成，共 {} 个项目", store.projects().len());

    Ok(Arc::new(store))
}

/// 读取json格式的种子文件
///
/// 文件内容是项目数组，字段与接口返回的项目字段一致
pub async fn load_seed_file(path: impl AsRef<Path>) -> DatabaseResult<Vec<ProjectInfo>> {
    let raw = tokio::fs::read_to_string(path.as_ref()).await?;
    let projects: Vec<ProjectInfo> = serde_json::from_str(&raw)?;
    Ok(projects)
}

/// 内置演示数据
pub fn default_catalog() -> Vec<ProjectInfo> {
    let entry = |id: u64, title: &str, category: &str, author: &str, image: &str, featured: bool, starred: bool| ProjectInfo {
        id,
        title: title.to_string(),
        category: category.to_string(),
        author: author.to_string(),
        image: image.to_string(),
        featured,
        starred,
    };

    vec![
        entry(1, "Quarterly Report Dashboard", "Corporate", "Dana Ortiz", "📊", true, false),
        entry(2, "Generative Poster Series", "Creative", "Mika Tanaka", "🎨", false, true),
        entry(3, "Team Onboarding Portal", "Corporate", "Lee Chen", "🏢", false, false),
        entry(4, "Ambient Sound Garden", "Creative", "Noor Haddad", "🎵", true, true),
        entry(5, "Pixel Weather Station", "Hardware", "Sam Patel", "🌦️", false, true),
        entry(6, "Recipe Scaler CLI", "Tools", "Alex Kim", "🍳", true, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseError;
    use std::collections::HashSet;
    use std::io::Write;

    fn config_with_seed(path: Option<&Path>) -> AppConfig {
        let seed = path.map(|p| p.to_string_lossy().into_owned());
        AppConfig::from_lookup(move |key| if key == "SEED_PATH" { seed.clone() } else { None }).unwrap()
    }

    #[test]
    fn default_catalog_has_unique_ids() {
        let catalog = default_catalog();
        let ids: HashSet<_> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
        assert!(catalog.iter().any(|p| p.featured));
        assert!(catalog.iter().any(|p| p.starred));
    }

    #[tokio::test]
    async fn builtin_catalog_is_used_without_seed_path() {
        let store = initialize_store(&config_with_seed(None)).await.unwrap();
        assert_eq!(store.projects(), default_catalog().as_slice());
    }

    #[tokio::test]
    async fn seed_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id":1,"title":"A","category":"Corporate","author":"x","image":"🏢","featured":true,"starred":false}},
                {{"id":2,"title":"B","category":"Creative","author":"y","image":"🎨","featured":false,"starred":true}}
            ]"#
        )
        .unwrap();

        let store = initialize_store(&config_with_seed(Some(file.path()))).await.unwrap();
        let ids: Vec<_> = store.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn bundled_seed_file_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../seed/projects.json");
        let projects = load_seed_file(path).await.unwrap();
        assert!(ShowcaseStore::new(projects).is_ok());
    }

    #[tokio::test]
    async fn broken_seed_files_fail() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_seed_file(file.path()).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Json(_)));

        let err = load_seed_file("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Io(_)));
    }
}
