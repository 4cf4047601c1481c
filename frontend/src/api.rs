use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;
use studyta::error::{StudyError, StudyResult};
use studyta::{AppConfig, AuthBackend, SessionSnapshot};
use studyta_shared::protocol::{
    ApiRequest, ChangePasswordRequest, ErrorBody, LoginRequest, LogoutRequest,
    PasswordResetRequest, SignupRequest,
};

/// 认证服务的 HTTP 客户端
#[derive(Clone, Debug, PartialEq)]
pub struct StudyTaApi {
    config: AppConfig,
}

impl StudyTaApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 发送一个类型化请求
    ///
    /// Non-2xx answers become backend errors carrying the server's message,
    /// so the UI can show it verbatim.
    async fn call<R>(&self, request: &R) -> StudyResult<R::Response>
    where
        R: ApiRequest + Serialize,
    {
        let url = self.config.endpoint(R::PATH);
        let op = format!("api {}", R::PATH);

        let res = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| StudyError::backend(e.to_string()).in_op(op.clone()))?
            .send()
            .await
            .map_err(|e| StudyError::backend(format!("网络错误: {}", e)).in_op(op.clone()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| StudyError::backend(e.to_string()).in_op(op.clone()))?;

        if !res.ok() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| format!("请求失败: {}", status));
            return Err(StudyError::backend(message).in_op_with(op, status.to_string()));
        }

        // 空响应体按 JSON null 处理，`()` 响应才能解析
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str::<R::Response>(body)
            .map_err(|e| StudyError::backend(e.to_string()).in_op_with(op, "decode response"))
    }
}

#[async_trait(?Send)]
impl AuthBackend for StudyTaApi {
    async fn login(&self, email: &str, password: &str) -> StudyResult<SessionSnapshot> {
        let raw = self
            .call(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        SessionSnapshot::from_raw_user(raw).ok_or_else(|| {
            StudyError::backend("Login response did not include a user").in_op("api login")
        })
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> StudyResult<()> {
        self.call(&SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
    }

    async fn logout(&self) -> StudyResult<()> {
        self.call(&LogoutRequest).await
    }

    async fn request_password_reset(&self, email: &str) -> StudyResult<()> {
        self.call(&PasswordResetRequest {
            email: email.to_string(),
        })
        .await
    }

    async fn change_password(&self, password: &str) -> StudyResult<()> {
        self.call(&ChangePasswordRequest {
            password: password.to_string(),
        })
        .await
    }
}
