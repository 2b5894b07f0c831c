/*
Author      : Seunghwan Shin
Create date : 2025-09-00
Description :

History     : 2025-09-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::{blog_repository_impl::*, snapshot_store_impl::*};

mod env_configuration;

mod traits;

mod dto;
mod enums;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, collect_service_impl::*, render_service_impl::*};

mod controller;
use controller::main_controller::*;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blog_stats_tracking")]
#[command(version, about = "cnblogs blog statistics tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Capture one snapshot of the blog statistics
    Collect,
    /// Aggregate stored snapshots and render trend charts
    Render,
}

#[tokio::main]
async fn main() {
    let cli: Cli = Cli::parse();

    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Tracking program start!");

    /* Blog ajax endpoint connection */
    let blog_repository: BlogRepositoryImpl = BlogRepositoryImpl::new(get_blog_config_info())
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing blog_repository.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    let snapshot_store: Arc<SnapshotStoreImpl> = Arc::new(SnapshotStoreImpl::new(PathBuf::from(
        get_system_config_info().data_dir(),
    )));

    /* 의존 주입 */
    let collect_service: CollectServiceImpl<BlogRepositoryImpl, SnapshotStoreImpl> =
        CollectServiceImpl::new(blog_repository, Arc::clone(&snapshot_store));

    let chart_service: ChartServiceImpl = ChartServiceImpl::new();

    let render_service: RenderServiceImpl<SnapshotStoreImpl, ChartServiceImpl> =
        RenderServiceImpl::new(
            snapshot_store,
            chart_service,
            PathBuf::from(get_system_config_info().chart_dir()),
        );

    let main_controller: MainController<
        CollectServiceImpl<BlogRepositoryImpl, SnapshotStoreImpl>,
        RenderServiceImpl<SnapshotStoreImpl, ChartServiceImpl>,
    > = MainController::new(collect_service, render_service);

    match cli.command {
        Command::Collect => main_controller.collect_task().await,
        Command::Render => main_controller.render_task().await,
    }
    .unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
