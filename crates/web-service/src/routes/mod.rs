//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::comments::__path_add_comment;
use crate::routes::comments::__path_get_comments;
use crate::routes::comments::{add_comment, get_comments};
use crate::routes::health::__path_health_check;
use crate::routes::health::health_check;
use crate::routes::projects::__path_get_projects;
use crate::routes::projects::__path_get_projects_by_category;
use crate::routes::projects::__path_get_projects_by_tab;
use crate::routes::projects::__path_list_categories;
use crate::routes::projects::{get_projects, get_projects_by_category, get_projects_by_tab, list_categories};
use crate::AppState;
use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod comments;
pub mod health;
pub mod projects;

/// 导出 `/api/v1` 下的所有路由
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，在同一个宏里面不能同时定义多个相同类型的http接口。
/// 同一路径下不同方法的接口可以放在一起，例如 `routes!(get_comments, add_comment)`。
fn routers() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_projects))
        .routes(routes!(list_categories))
        .routes(routes!(get_projects_by_category))
        .routes(routes!(get_projects_by_tab))
        .routes(routes!(get_comments, add_comment))
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由（业务接口挂在 `/api/v1` 下，健康检查在 `/health`）
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "projects", description = "项目目录：全部、按分类、按视图（featured/latest/starred）"),
            (name = "comments", description = "项目评论：只追加，按写入顺序返回"),
            (name = "health", description = "健康检查"),
        ),
    )]
    struct ApiDoc;

    // 使用`utoipa_axum`提供的OpenApiRouter来创建路由。
    // 同时传递共享状态数据到路由中供使用。
    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health_check))
        .nest("/api/v1", routers())
        .with_state(shared_state)
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router.merge(Scalar::with_url("/docs", api))
}
