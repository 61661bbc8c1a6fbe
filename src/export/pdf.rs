// ==========================================
// 产能利用率计算器 - PDF 报告
// ==========================================
// 职责: 单页 A4 报告 (PDF 1.4, 标准 Helvetica 字体)
// 坐标: 以毫米为单位、左上角为原点,输出时换算为 PDF 点坐标
// 注意: 标准字体仅覆盖 WinAnsi 字符集,PDF 报告固定使用英文文案
// ==========================================

use crate::export::document::ReportDocument;
use crate::export::error::ExportResult;
use crate::export::format::{format_en_in, format_rate, format_report_date};
use crate::i18n::{items_in, t_in};
use std::io::Write;
use std::path::{Path, PathBuf};

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const PT_PER_MM: f64 = 72.0 / 25.4;

/// 报告主色 (页眉/页脚色带)
const PRIMARY_RGB: (u8, u8, u8) = (36, 94, 79);
const WHITE: (u8, u8, u8) = (255, 255, 255);
const BLACK: (u8, u8, u8) = (0, 0, 0);

/// PDF 文案语言
const PDF_LOCALE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfFont {
    Regular,
    Bold,
    Italic,
}

impl PdfFont {
    fn resource_name(&self) -> &'static str {
        match self {
            PdfFont::Regular => "F1",
            PdfFont::Bold => "F2",
            PdfFont::Italic => "F3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

// ==========================================
// PdfPage - 单页内容流构建器
// ==========================================
#[derive(Debug, Default)]
pub struct PdfPage {
    ops: Vec<String>,
}

impl PdfPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 填充矩形 (x, y 为左上角,单位毫米)
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, rgb: (u8, u8, u8)) {
        let (r, g, b) = rgb_components(rgb);
        self.ops.push(format!(
            "{:.3} {:.3} {:.3} rg {:.2} {:.2} {:.2} {:.2} re f",
            r,
            g,
            b,
            x * PT_PER_MM,
            (PAGE_HEIGHT_MM - y - h) * PT_PER_MM,
            w * PT_PER_MM,
            h * PT_PER_MM
        ));
    }

    /// 写入单行文本 (y 为基线,单位毫米)
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        font: PdfFont,
        size: f64,
        rgb: (u8, u8, u8),
        align: TextAlign,
    ) {
        let x_pt = match align {
            TextAlign::Left => x * PT_PER_MM,
            TextAlign::Center => x * PT_PER_MM - approximate_width_pt(content, size) / 2.0,
        };
        let (r, g, b) = rgb_components(rgb);
        self.ops.push(format!(
            "BT {:.3} {:.3} {:.3} rg /{} {} Tf {:.2} {:.2} Td ({}) Tj ET",
            r,
            g,
            b,
            font.resource_name(),
            size,
            x_pt,
            (PAGE_HEIGHT_MM - y) * PT_PER_MM,
            escape_pdf_text(content)
        ));
    }

    fn content_stream(&self) -> String {
        self.ops.join("\n")
    }

    /// 序列化为完整 PDF 文件
    pub fn to_bytes(&self) -> Vec<u8> {
        let content = self.content_stream();
        let objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Resources << /Font << /F1 4 0 R /F2 5 0 R /F3 6 0 R >> >> /Contents 7 0 R >>",
                PAGE_WIDTH_MM * PT_PER_MM,
                PAGE_HEIGHT_MM * PT_PER_MM
            ),
            font_object("Helvetica"),
            font_object("Helvetica-Bold"),
            font_object("Helvetica-Oblique"),
            format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ),
        ];

        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n");

        let mut offsets = Vec::with_capacity(objects.len());
        for (index, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, body).as_bytes());
        }

        let xref_offset = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_offset
            )
            .as_bytes(),
        );
        out
    }
}

fn font_object(base_font: &str) -> String {
    format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
        base_font
    )
}

fn rgb_components(rgb: (u8, u8, u8)) -> (f64, f64, f64) {
    (
        rgb.0 as f64 / 255.0,
        rgb.1 as f64 / 255.0,
        rgb.2 as f64 / 255.0,
    )
}

/// Helvetica 平均字宽近似 (0.5 em)
fn approximate_width_pt(content: &str, size: f64) -> f64 {
    content.chars().count() as f64 * size * 0.5
}

/// 转义为 PDF 字面字符串 (WinAnsi)
///
/// 括号与反斜杠转义; 项目符号与 Latin-1 字符写八进制; 其余非 ASCII 替换为 '?'
fn escape_pdf_text(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '•' => out.push_str("\\225"),
            '₹' => out.push_str("Rs."),
            ' '..='~' => out.push(c),
            '\u{a0}'..='\u{ff}' => out.push_str(&format!("\\{:03o}", c as u32)),
            _ => out.push('?'),
        }
    }
    out
}

// ==========================================
// 报告排版
// ==========================================

/// 生成报告 PDF 字节
pub fn render_pdf(doc: &ReportDocument) -> Vec<u8> {
    let l = PDF_LOCALE;
    let units = t_in(l, "report.units");
    let mut page = PdfPage::new();

    // 页眉
    page.fill_rect(0.0, 0.0, PAGE_WIDTH_MM, 30.0, PRIMARY_RGB);
    page.text(
        105.0,
        15.0,
        &t_in(l, "pdf.title"),
        PdfFont::Bold,
        20.0,
        WHITE,
        TextAlign::Center,
    );

    // 基本信息
    page.text(
        20.0,
        40.0,
        &format!(
            "{}{}",
            t_in(l, "pdf.generated_on"),
            format_report_date(doc.generated_on)
        ),
        PdfFont::Regular,
        12.0,
        BLACK,
        TextAlign::Left,
    );
    page.text(
        20.0,
        50.0,
        &format!("{}{}", t_in(l, "pdf.company"), doc.company_name),
        PdfFont::Regular,
        12.0,
        BLACK,
        TextAlign::Left,
    );

    // 分析数据
    page.text(
        105.0,
        70.0,
        &t_in(l, "pdf.analysis"),
        PdfFont::Bold,
        16.0,
        BLACK,
        TextAlign::Center,
    );
    let analysis_lines = [
        format!(
            "{}: {} {}",
            t_in(l, "report.max_capacity"),
            format_en_in(doc.max_capacity),
            units
        ),
        format!(
            "{}: {} {}",
            t_in(l, "report.actual_production"),
            format_en_in(doc.actual_production),
            units
        ),
        format!(
            "{}: {}%",
            t_in(l, "report.utilization_rate"),
            format_rate(doc.utilization_rate)
        ),
        format!(
            "{}: {} {}",
            t_in(l, "report.unused_capacity"),
            format_en_in(doc.unused_capacity),
            units
        ),
    ];
    for (i, line) in analysis_lines.iter().enumerate() {
        let y = 90.0 + 10.0 * i as f64;
        page.text(
            20.0,
            y,
            line,
            PdfFont::Regular,
            12.0,
            BLACK,
            TextAlign::Left,
        );
    }

    // 建议 (PDF 固定英文,按利用率重新取文案)
    page.text(
        105.0,
        150.0,
        &t_in(l, "pdf.recommendations"),
        PdfFont::Bold,
        16.0,
        BLACK,
        TextAlign::Center,
    );
    let recommendations = items_in(l, doc.recommendation_tier.i18n_key());
    for (i, rec) in recommendations.iter().enumerate() {
        let y = 170.0 + 10.0 * i as f64;
        page.text(
            20.0,
            y,
            &format!("• {}", rec),
            PdfFont::Regular,
            12.0,
            BLACK,
            TextAlign::Left,
        );
    }

    // 页脚
    page.fill_rect(0.0, 277.0, PAGE_WIDTH_MM, 20.0, PRIMARY_RGB);
    page.text(
        105.0,
        287.0,
        &t_in(l, "pdf.footer"),
        PdfFont::Italic,
        10.0,
        WHITE,
        TextAlign::Center,
    );

    page.to_bytes()
}

/// 写出 PDF 文件
///
/// # 返回
/// 写入的文件路径
pub fn write_pdf(doc: &ReportDocument, path: impl AsRef<Path>) -> ExportResult<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let bytes = render_pdf(doc);
    let mut file = std::fs::File::create(path)?;
    file.write_all(&bytes)?;

    tracing::info!(path = %path.display(), size = bytes.len(), "PDF 报告已生成");
    Ok(path.to_path_buf())
}
