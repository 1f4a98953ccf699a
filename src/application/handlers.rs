use crate::application::commands::utils::parse_field_args;
use crate::application::commands::{Command, HELP_TEXT, parse_command};
use crate::application::services::{EditSession, RecordService};
use crate::domain::entities::record::{FieldSet, Record};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Reply(String),
    Quit,
}

/// Owns the edit session and dispatches console commands through the record service
pub struct ConsoleHandler<R: Record> {
    service: RecordService<R>,
    session: EditSession<R>,
}

fn render<R: Record>(records: &[R]) -> String {
    if records.is_empty() {
        return format!("No {} records yet", R::KIND);
    }
    let mut content = format!("📝 {} {} record(s):\n", records.len(), R::KIND);
    for record in records {
        content.push_str(&format!("  {}\n", record));
    }
    content.trim_end().to_string()
}

fn render_buffer<F: FieldSet>(id: u64, buffer: &F) -> String {
    let values: Vec<String> = F::FIELD_NAMES
        .iter()
        .map(|name| format!("{}={}", name, buffer.get(name).unwrap_or_default()))
        .collect();
    format!("✏️ Editing #{}\n  {}", id, values.join("; "))
}

impl<R: Record> ConsoleHandler<R> {
    pub fn new(service: RecordService<R>) -> Self {
        Self {
            service,
            session: EditSession::new(),
        }
    }

    pub async fn handle(&mut self, command: Command) -> Flow {
        debug!("Handling command: {:?}", command);
        let reply = match command {
            Command::Quit => return Flow::Quit,
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::List => Ok(render(&self.service.list().await)),
            Command::Reload => Ok(render(&self.service.reload().await)),
            Command::Add(args) => self.add(&args).await,
            Command::Edit(id) => self.start_edit(id).await,
            Command::Set { field, value } => self
                .session
                .set_field(&field, value)
                .map(|_| format!("Set {}", field))
                .map_err(|e| e.to_string()),
            Command::Commit => self.commit_edit().await,
            Command::Cancel => self
                .session
                .cancel()
                .map(|id| format!("Discarded changes to #{}", id))
                .map_err(|e| e.to_string()),
            Command::Delete(id) => self.delete(id).await,
        };

        match reply {
            Ok(text) => Flow::Reply(text),
            Err(err) => {
                warn!("Command failed: {}", err);
                Flow::Reply(format!("❌ {}", err))
            }
        }
    }

    async fn add(&self, args: &str) -> Result<String, String> {
        let fields = parse_field_args::<R::Fields>(args)?;
        let records = self.service.create(fields).await?;
        let id = records.last().map(|r| r.id()).unwrap_or_default();
        Ok(format!("✅ Added {} #{}", R::KIND, id))
    }

    async fn start_edit(&mut self, id: u64) -> Result<String, String> {
        let record = self.service.get(id).await?;
        let buffer = self.session.start(&record).map_err(|e| e.to_string())?;
        Ok(render_buffer(id, &buffer))
    }

    // leaves Editing only once the save went through
    async fn commit_edit(&mut self) -> Result<String, String> {
        let (id, fields) = {
            let (id, buffer) = self.session.buffer().map_err(|e| e.to_string())?;
            (id, buffer.clone())
        };
        self.service.edit(id, fields).await?;
        self.session.commit().map_err(|e| e.to_string())?;
        Ok(format!("✅ Saved {} #{}", R::KIND, id))
    }

    async fn delete(&self, id: u64) -> Result<String, String> {
        if self.session.editing_id() == Some(id) {
            return Err(format!("#{} is being edited; commit or cancel first", id));
        }
        let before = self.service.list().await.len();
        let after = self.service.delete(id).await?.len();
        if before == after {
            Ok(format!("No {} with ID {}", R::KIND, id))
        } else {
            Ok(format!("🗑️ Deleted {} #{}", R::KIND, id))
        }
    }
}

/// Read commands line by line until `quit` or end of input
pub async fn run_console<R, I, O>(
    handler: &mut ConsoleHandler<R>,
    input: I,
    mut output: O,
) -> std::io::Result<()>
where
    R: Record,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                output.write_all(format!("❌ {}\n", err).as_bytes()).await?;
                output.flush().await?;
                continue;
            }
        };

        match handler.handle(command).await {
            Flow::Reply(text) => {
                output.write_all(text.as_bytes()).await?;
                output.write_all(b"\n").await?;
                output.flush().await?;
            }
            Flow::Quit => break,
        }
    }
    info!("Console closed");
    Ok(())
}
