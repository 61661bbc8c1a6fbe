// ==========================================
// 产能利用率计算器 - 报告导出 API
// ==========================================
// 职责: 文本 (剪贴板)、PDF、CSV、JSON、邮件 (模拟)
// 架构: API 层 → Export 层
// 红线: 只读会话快照; 无快照时使用配置的默认值
// ==========================================

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::config::ReportSettings;
use crate::domain::session::{ReportData, SessionContext};
use crate::export::{
    render_csv, render_json, render_text_report, write_pdf, write_text_file, DeliveryReceipt,
    ReportDocument, ReportMailer, DEFAULT_CSV_FILE_NAME, DEFAULT_PDF_FILE_NAME,
};
use crate::i18n::t_in;

// ==========================================
// ReportApi - 报告导出 API
// ==========================================
pub struct ReportApi {
    settings: Arc<ReportSettings>,
    mailer: Arc<dyn ReportMailer>,
}

impl ReportApi {
    pub fn new(settings: Arc<ReportSettings>, mailer: Arc<dyn ReportMailer>) -> Self {
        Self { settings, mailer }
    }

    fn locale(&self) -> &str {
        self.settings.locale.as_str()
    }

    fn today() -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    /// 报告数据 (快照或默认值)
    pub fn report_data(&self, ctx: &SessionContext) -> ReportData {
        ctx.report_data(&self.settings.fallbacks)
    }

    /// 构建报告文档
    pub fn report_document(&self, ctx: &SessionContext, generated_on: NaiveDate) -> ReportDocument {
        let data = self.report_data(ctx);
        let potential_revenue = ctx.last().and_then(|r| r.result.potential_revenue);
        ReportDocument::build(
            &data,
            potential_revenue,
            self.locale(),
            &self.settings.company_name,
            generated_on,
        )
    }

    // ==========================================
    // 文本报告
    // ==========================================

    /// 剪贴板文本 (指定日期)
    pub fn text_report_on(&self, ctx: &SessionContext, generated_on: NaiveDate) -> String {
        render_text_report(&self.report_document(ctx, generated_on))
    }

    /// 剪贴板文本 (当天)
    pub fn text_report(&self, ctx: &SessionContext) -> String {
        let text = self.text_report_on(ctx, Self::today());
        tracing::info!(len = text.len(), "{}", t_in(self.locale(), "message.report_copied"));
        text
    }

    // ==========================================
    // 文件导出
    // ==========================================

    /// 导出 PDF
    ///
    /// # 参数
    /// - path: 目标路径; None 时写入导出目录下的默认文件名
    pub fn export_pdf(&self, ctx: &SessionContext, path: Option<&Path>) -> ApiResult<PathBuf> {
        let target = self.resolve_path(path, DEFAULT_PDF_FILE_NAME);
        let doc = self.report_document(ctx, Self::today());
        let written =
            write_pdf(&doc, &target).map_err(|e| ApiError::from_export_error(e, self.locale()))?;
        tracing::info!(
            report_id = %doc.report_id,
            "{}",
            t_in(self.locale(), "message.pdf_downloaded")
        );
        Ok(written)
    }

    /// 导出 CSV
    pub fn export_csv(&self, ctx: &SessionContext, path: Option<&Path>) -> ApiResult<PathBuf> {
        let target = self.resolve_path(path, DEFAULT_CSV_FILE_NAME);
        let doc = self.report_document(ctx, Self::today());
        let content =
            render_csv(&doc).map_err(|e| ApiError::from_export_error(e, self.locale()))?;
        write_text_file(&target, &content)
            .map_err(|e| ApiError::from_export_error(e, self.locale()))
    }

    /// 导出 JSON 文本
    pub fn export_json(&self, ctx: &SessionContext) -> ApiResult<String> {
        let doc = self.report_document(ctx, Self::today());
        render_json(&doc).map_err(|e| ApiError::from_export_error(e, self.locale()))
    }

    fn resolve_path(&self, path: Option<&Path>, default_name: &str) -> PathBuf {
        match path {
            Some(p) => p.to_path_buf(),
            None => self.settings.export_dir.join(default_name),
        }
    }

    // ==========================================
    // 邮件 (模拟)
    // ==========================================

    /// 发送报告邮件
    ///
    /// # 返回
    /// - Ok(DeliveryReceipt): 投递回执
    /// - Err(ApiError::InvalidEmail): 邮箱无效
    pub async fn send_email(
        &self,
        ctx: &SessionContext,
        recipient: &str,
    ) -> ApiResult<DeliveryReceipt> {
        let subject = t_in(self.locale(), "mail.subject");
        let body = self.text_report_on(ctx, Self::today());

        let receipt = self
            .mailer
            .send_report(recipient, &subject, &body)
            .await
            .map_err(|e| ApiError::from_export_error(e, self.locale()))?;

        tracing::info!(
            message_id = %receipt.message_id,
            "{}",
            t_in(self.locale(), "message.email_sent")
        );
        Ok(receipt)
    }
}
