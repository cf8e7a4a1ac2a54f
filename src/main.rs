use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};

// 从 lib.rs 导入模块
use tutor_admin::config::AppConfig;
use tutor_admin::routes;
use tutor_admin::runtime::lifetime;
use tutor_admin::services::{
    AttendanceService, AuthService, CourseService, PayrollService, SalaryService, StudentService,
    UserService,
};
use tutor_admin::utils::jwt::JwtUtils;
use tutor_admin::utils::{json_error_handler, query_error_handler};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = chrono::Utc::now();

    // 启动前预处理 //

    setup_panic!();
    let config = AppConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::io::Error::other(e.to_string())
    })?;

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = lifetime::startup::prepare_server_startup(&config)
        .await
        .map_err(|e| std::io::Error::other(e.format_simple()))?;
    let storage = startup.storage;

    // 服务只构建一次，通过 web::Data 注入各个 worker
    let jwt = JwtUtils::new(&config.jwt);
    let jwt_data = web::Data::new(jwt.clone());
    let auth_service = web::Data::new(AuthService::new(storage.clone(), jwt));
    let user_service = web::Data::new(UserService::new(storage.clone()));
    let salary_service = web::Data::new(SalaryService::new(storage.clone()));
    let student_service = web::Data::new(StudentService::new(
        storage.clone(),
        config.upload.clone(),
    ));
    let course_service = web::Data::new(CourseService::new(storage.clone()));
    let attendance_service = web::Data::new(AttendanceService::new(storage.clone()));
    let payroll_service = web::Data::new(PayrollService::new(storage));

    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time)
            .num_milliseconds()
    );

    // 预处理完成 //

    warn!("Using {} CPU cores for the server", config.server.workers);

    let cors_max_age = config.cors.max_age;
    let keep_alive = config.server.timeouts.keep_alive;
    let max_payload_size = config.server.limits.max_payload_size;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(cors_max_age),
            )
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Connection", "keep-alive"))
                    .add(("Keep-Alive", format!("timeout={keep_alive}, max=1000")))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(web::QueryConfig::default().error_handler(query_error_handler)) // 设置查询参数错误处理器
            .app_data(web::JsonConfig::default().error_handler(json_error_handler)) // 设置JSON错误处理器
            .app_data(web::PayloadConfig::new(max_payload_size)) // 设置最大请求体大小
            .app_data(jwt_data.clone())
            .app_data(auth_service.clone())
            .app_data(user_service.clone())
            .app_data(salary_service.clone())
            .app_data(student_service.clone())
            .app_data(course_service.clone())
            .app_data(attendance_service.clone())
            .app_data(payroll_service.clone())
            .configure(routes::configure_routes)
    })
    .keep_alive(std::time::Duration::from_secs(keep_alive)) // 启用长连接
    .client_request_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_request,
    )) // 客户端超时
    .client_disconnect_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_disconnect,
    )) // 断连超时
    .workers(config.server.workers);

    let bind_address = config.server_bind_address();
    warn!("Starting server at http://{}", bind_address);
    let server = server.bind(bind_address)?.run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
