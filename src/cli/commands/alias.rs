use anyhow::{Context, Result};
use chrono::Local;
use std::io::{BufRead, Write};
use tracing::info;

use crate::domain::Alias;
use crate::repository::AliasRepository;
use crate::service::AliasService;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const COLUMN_PADDING: usize = 2;

/// Add a new alias
pub async fn execute_add<R, W>(
    service: &AliasService<R>,
    name: &str,
    command: &str,
    out: &mut W,
) -> Result<()>
where
    R: AliasRepository,
    W: Write,
{
    info!(name, "adding new alias");

    service
        .create_alias(name, command)
        .await
        .context("failed to create alias")?;

    info!(name, "alias created successfully");
    writeln!(out, "Alias '{name}' created successfully")?;
    Ok(())
}

/// List all aliases as an aligned table
pub async fn execute_list<R, W>(service: &AliasService<R>, out: &mut W) -> Result<()>
where
    R: AliasRepository,
    W: Write,
{
    info!("listing aliases");

    let aliases = service
        .list_aliases()
        .await
        .context("failed to list aliases")?;

    if aliases.is_empty() {
        writeln!(out, "No aliases found")?;
        return Ok(());
    }

    write!(out, "{}", format_alias_table(&aliases))?;
    Ok(())
}

/// Edit the command of an existing alias
pub async fn execute_edit<R, W>(
    service: &AliasService<R>,
    name: &str,
    new_command: &str,
    out: &mut W,
) -> Result<()>
where
    R: AliasRepository,
    W: Write,
{
    info!(name, "editing alias");

    service
        .update_alias(name, new_command)
        .await
        .context("failed to update alias")?;

    info!(name, "alias updated successfully");
    writeln!(out, "Alias '{name}' updated successfully")?;
    Ok(())
}

/// Remove an alias, asking for confirmation unless `force` is set
pub async fn execute_remove<R, I, W>(
    service: &AliasService<R>,
    name: &str,
    force: bool,
    input: &mut I,
    out: &mut W,
) -> Result<()>
where
    R: AliasRepository,
    I: BufRead,
    W: Write,
{
    info!(name, "removing alias");

    if !force {
        let alias = service
            .get_alias(name)
            .await
            .context("failed to get alias")?;

        writeln!(out, "Alias: {}", alias.name)?;
        writeln!(out, "Command: {}", alias.command)?;
        writeln!(out)?;

        if !confirm_delete(name, input, out)? {
            info!(name, "alias removal cancelled by user");
            writeln!(out, "Removal cancelled")?;
            return Ok(());
        }
    }

    service
        .delete_alias(name)
        .await
        .context("failed to delete alias")?;

    info!(name, "alias removed successfully");
    writeln!(out, "Alias '{name}' removed successfully")?;
    Ok(())
}

/// Prompt user for confirmation
fn confirm_delete<I: BufRead, W: Write>(name: &str, input: &mut I, out: &mut W) -> Result<bool> {
    write!(out, "Are you sure you want to remove alias '{name}'? (y/N): ")?;
    out.flush()?;

    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return Ok(false);
    }

    let response = response.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// NAME / COMMAND / CREATED の3列を揃えた表を作る
pub fn format_alias_table(aliases: &[Alias]) -> String {
    let mut rows: Vec<[String; 3]> = vec![
        ["NAME".into(), "COMMAND".into(), "CREATED".into()],
        ["----".into(), "-------".into(), "-------".into()],
    ];
    rows.extend(aliases.iter().map(|alias| {
        [
            alias.name.clone(),
            alias.command.clone(),
            alias
                .created_at
                .with_timezone(&Local)
                .format(TIME_FORMAT)
                .to_string(),
        ]
    }));

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    for row in &rows {
        let line: String = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{cell:<w$}", w = width + COLUMN_PADDING))
            .collect();
        table.push_str(line.trim_end());
        table.push('\n');
    }
    table
}
