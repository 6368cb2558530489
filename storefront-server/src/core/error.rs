use thiserror::Error;

/// 服务器启动与运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("绑定端口失败: {0}")]
    Bind(#[source] std::io::Error),

    #[error("HTTP 服务错误: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
