//! Interactive terminal front end for the invoice component.
//!
//! Editing walks through every field; an empty answer keeps the current
//! value and `-` clears it. After the last field the invoice is generated.
//! While reviewing, `d` downloads, `e` edits and `q` quits.

use anyhow::Context;
use invoice_form::{FormField, InvoiceView, Phase};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::component::InvoiceComponent;

const CLEAR_TOKEN: &str = "-";

/// Drive `component` from line-based input until the user quits or input ends.
pub async fn run_session<R, W>(
    component: &mut InvoiceComponent,
    shop_name: &str,
    mut reader: R,
    mut writer: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write(&mut writer, &format!("{shop_name} - Invoice Generator\n")).await?;

    loop {
        match component.phase() {
            Phase::Editing => {
                if !fill_form(component, &mut reader, &mut writer).await? {
                    return Ok(());
                }
                if let Err(e) = component.generate_invoice().await {
                    debug!("Invoice not generated: {e}");
                }
            }
            Phase::Reviewing => {
                if let Some(view) = component.view() {
                    write(&mut writer, &render_view(&view)).await?;
                }
                if !review(component, &mut reader, &mut writer).await? {
                    return Ok(());
                }
            }
        }
    }
}

/// Prompt for every field. Returns `false` when input ends.
async fn fill_form<R, W>(
    component: &mut InvoiceComponent,
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write(writer, "\n").await?;
    for field in FormField::ALL {
        let current = component.form().field(field);
        let prompt = if current.is_empty() {
            format!("{} ({}): ", field.label(), field.placeholder())
        } else {
            format!("{} [{current}]: ", field.label())
        };
        let Some(answer) = ask(reader, writer, &prompt).await? else {
            return Ok(false);
        };
        match answer.as_str() {
            "" => {}
            CLEAR_TOKEN => component.set_field(field, "")?,
            value => component.set_field(field, value)?,
        }
    }
    Ok(true)
}

/// Offer the review actions until the user edits or quits.
/// Returns `false` when the session should end.
async fn review<R, W>(
    component: &mut InvoiceComponent,
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let prompt = "[d] Download invoice  [e] Edit invoice  [q] Quit: ";
        let Some(answer) = ask(reader, writer, prompt).await? else {
            return Ok(false);
        };
        match answer.trim() {
            "d" => match component.download_invoice().await {
                Ok(path) => write(writer, &format!("Saved {}\n", path.display())).await?,
                Err(e) => debug!("Invoice not downloaded: {e}"),
            },
            "e" => {
                component.edit_invoice()?;
                return Ok(true);
            }
            "q" => return Ok(false),
            other => write(writer, &format!("Unknown choice: {other}\n")).await?,
        }
    }
}

fn render_view(view: &InvoiceView) -> String {
    let mut out = format!("\n{}\n", view.title);
    for line in view.lines() {
        out.push_str(&line);
        out.push('\n');
    }
    if view.qr_code.is_some() {
        out.push_str("QR code: included in the downloaded image\n");
    }
    out.push('\n');
    out
}

/// Show `prompt` and read one line without its terminator, or `None` at end
/// of input. Lines that are not UTF-8 are reported and asked again.
async fn ask<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> anyhow::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        write(writer, prompt).await?;
        let mut line = Vec::new();
        let n = reader
            .read_until(b'\n', &mut line)
            .await
            .context("failed to read input")?;
        if n == 0 {
            return Ok(None);
        }
        match String::from_utf8(line) {
            Ok(line) => return Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
            Err(e) => {
                warn!(bytes = n, "Discarded input line: {e}");
                write(writer, "Input is not valid UTF-8, please try again\n").await?;
            }
        }
    }
}

async fn write<W>(writer: &mut W, text: &str) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
