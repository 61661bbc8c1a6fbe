// ==========================================
// 产能利用率计算器 - 报告邮件 (模拟)
// ==========================================
// 职责: 邮箱校验 + 投递接口
// 红线: 不做真实投递; SimulatedMailer 仅记录日志并返回回执
// ==========================================

use crate::export::error::{ExportError, ExportResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

// ==========================================
// DeliveryReceipt - 投递回执
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub message_id: String,
    pub recipient: String,
    pub subject: String,
    pub sent_at: DateTime<Utc>,
}

/// 校验邮箱地址
///
/// 规则: 去除首尾空白后非空且包含 '@'
pub fn validate_email(address: &str) -> ExportResult<String> {
    let trimmed = address.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        return Err(ExportError::InvalidEmail(address.to_string()));
    }
    Ok(trimmed.to_string())
}

// ==========================================
// Trait: ReportMailer
// ==========================================
#[async_trait]
pub trait ReportMailer: Send + Sync {
    /// 投递报告
    ///
    /// # 返回
    /// - Ok(DeliveryReceipt): 投递回执
    /// - Err(ExportError::InvalidEmail): 邮箱无效
    async fn send_report(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> ExportResult<DeliveryReceipt>;
}

// ==========================================
// SimulatedMailer - 模拟投递
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SimulatedMailer {
    delay: Duration,
}

impl SimulatedMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 带展示延迟的模拟投递
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ReportMailer for SimulatedMailer {
    async fn send_report(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> ExportResult<DeliveryReceipt> {
        let recipient = validate_email(recipient)?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let receipt = DeliveryReceipt {
            message_id: Uuid::new_v4().to_string(),
            recipient,
            subject: subject.to_string(),
            sent_at: Utc::now(),
        };

        tracing::info!(
            message_id = %receipt.message_id,
            recipient = %receipt.recipient,
            subject = %receipt.subject,
            body_len = body.len(),
            "模拟邮件已投递"
        );

        Ok(receipt)
    }
}
