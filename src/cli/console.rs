//! Line-oriented prompts over async input and output streams.
//!
//! Answers are read as raw bytes so that non-UTF-8 input reaches validation
//! intact. End of input, and an interrupt while a prompt waits, surface as
//! `PromptError::Interrupted`.

use crate::cli::terminal::Interrupts;
use crate::domain::RawValue;
use crate::error::{PromptError, PromptResult};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Split};

/// Prompt driver for the interactive session.
pub struct Console<R, W> {
    input: Split<R>,
    output: W,
    interrupts: Option<Interrupts>,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: input.split(b'\n'),
            output,
            interrupts: None,
        }
    }

    /// Interrupt pending prompts whenever `interrupts` yields.
    pub fn with_interrupts(mut self, interrupts: Interrupts) -> Self {
        self.interrupts = Some(interrupts);
        self
    }

    /// Whether an interrupt arrived since the last prompt, clearing it.
    ///
    /// Interrupts that land while no prompt is waiting (during a long
    /// import, say) are only seen here.
    pub async fn take_interrupt(&mut self) -> bool {
        let Some(interrupts) = self.interrupts.as_mut() else {
            return false;
        };

        // Let the signal listener forward anything already delivered
        tokio::task::yield_now().await;

        let mut interrupted = false;
        while interrupts.try_recv().is_ok() {
            interrupted = true;
        }
        interrupted
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line.
    pub async fn say(&mut self, line: &str) -> PromptResult<()> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Print an empty line.
    pub async fn blank(&mut self) -> PromptResult<()> {
        self.say("").await
    }

    /// Ask for a free-form answer, kept as raw input.
    pub async fn ask_raw(&mut self, label: &str) -> PromptResult<RawValue> {
        self.prompt(&format!("? {}: ", label)).await?;
        let line = self.read_line().await?;
        Ok(RawValue::from_bytes(line))
    }

    /// Ask for a free-form text answer.
    pub async fn ask_text(&mut self, label: &str) -> PromptResult<String> {
        Ok(self.ask_raw(label).await?.to_text_lossy())
    }

    /// Ask a yes/no question; an empty answer means no.
    pub async fn confirm(&mut self, label: &str) -> PromptResult<bool> {
        loop {
            let answer = self.ask_text(&format!("{} [y/N]", label)).await?;
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.").await?,
            }
        }
    }

    /// Let the user pick one of `choices` by number.
    ///
    /// With a `default`, an empty answer picks that entry. `choices` must not
    /// be empty.
    pub async fn select<T: Clone>(
        &mut self,
        label: &str,
        choices: &[(String, T)],
        default: Option<usize>,
    ) -> PromptResult<T> {
        self.say(&format!("? {}", label)).await?;
        for (i, (text, _)) in choices.iter().enumerate() {
            let marker = if default == Some(i) { '>' } else { ' ' };
            self.say(&format!("{} {}) {}", marker, i + 1, text)).await?;
        }

        let question = match default {
            Some(i) => format!("Choice [{}]", i + 1),
            None => "Choice".to_string(),
        };

        loop {
            let answer = self.ask_text(&question).await?;
            let answer = answer.trim();

            let picked = match (answer.is_empty(), default) {
                (true, Some(i)) => Some(i),
                _ => answer
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=choices.len()).contains(n))
                    .map(|n| n - 1),
            };

            match picked.and_then(|i| choices.get(i)) {
                Some((_, value)) => return Ok(value.clone()),
                None => {
                    self.say(&format!(
                        "Please enter a number between 1 and {}.",
                        choices.len()
                    ))
                    .await?
                }
            }
        }
    }

    async fn prompt(&mut self, text: &str) -> PromptResult<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn read_line(&mut self) -> PromptResult<Vec<u8>> {
        let next = match self.interrupts.as_mut() {
            // Typed input wins over an interrupt that arrives with it
            Some(interrupts) => tokio::select! {
                biased;
                line = self.input.next_segment() => line?,
                Some(()) = interrupts.recv() => None,
            },
            None => self.input.next_segment().await?,
        };

        // Interrupt, or end of input
        let mut line = next.ok_or(PromptError::Interrupted)?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &'static [u8]) -> Console<&'static [u8], Vec<u8>> {
        Console::new(input, Vec::new())
    }

    fn output(console: Console<&'static [u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[tokio::test]
    async fn test_ask_raw_strips_line_endings() {
        let mut console = console(b"Ada\r\n\xff\n");
        assert_eq!(console.ask_raw("Name").await.unwrap(), RawValue::from("Ada"));
        assert_eq!(
            console.ask_raw("Phone").await.unwrap(),
            RawValue::Binary(vec![0xff])
        );
        assert_eq!(output(console), "? Name: ? Phone: ");
    }

    #[tokio::test]
    async fn test_end_of_input_is_interrupt() {
        let mut console = console(b"");
        assert!(matches!(
            console.ask_text("Query").await,
            Err(PromptError::Interrupted)
        ));
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        let mut console = console(b"Ada");
        assert_eq!(console.ask_text("Name").await.unwrap(), "Ada");
    }

    #[tokio::test]
    async fn test_interrupt_while_waiting_for_input() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        // The writer half stays open, so the read stays pending
        let (_typing, input) = tokio::io::duplex(64);
        let mut console =
            Console::new(tokio::io::BufReader::new(input), Vec::new()).with_interrupts(rx);

        tx.send(()).unwrap();
        assert!(matches!(
            console.ask_text("Query").await,
            Err(PromptError::Interrupted)
        ));
        assert!(!console.take_interrupt().await);
    }

    #[tokio::test]
    async fn test_typed_input_wins_over_interrupt() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let mut console = console(b"Ada\n").with_interrupts(rx);

        tx.send(()).unwrap();
        assert_eq!(console.ask_text("Name").await.unwrap(), "Ada");
        assert!(console.take_interrupt().await);
        assert!(!console.take_interrupt().await);
    }

    #[tokio::test]
    async fn test_closed_interrupt_source_is_ignored() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<()>();
        drop(tx);
        let (mut typing, input) = tokio::io::duplex(64);
        let mut console =
            Console::new(tokio::io::BufReader::new(input), Vec::new()).with_interrupts(rx);

        let typist = tokio::spawn(async move {
            typing.write_all(b"Ada\n").await.unwrap();
            typing
        });
        assert_eq!(console.ask_text("Name").await.unwrap(), "Ada");
        drop(typist.await.unwrap());
    }

    #[tokio::test]
    async fn test_confirm() {
        let mut console = console(b"maybe\nYES\n\n");
        assert!(console.confirm("Are you sure").await.unwrap());
        assert!(!console.confirm("Are you sure").await.unwrap());

        let out = output(console);
        assert!(out.contains("Please answer y or n."));
        assert!(out.contains("? Are you sure [y/N]: "));
    }

    #[tokio::test]
    async fn test_select_default_and_retry() {
        let choices = vec![("one".to_string(), 1), ("two".to_string(), 2)];
        let mut console = console(b"\n9\nx\n2\n");

        assert_eq!(console.select("Pick", &choices, Some(0)).await.unwrap(), 1);
        assert_eq!(console.select("Pick", &choices, None).await.unwrap(), 2);

        let out = output(console);
        assert!(out.contains("> 1) one"));
        assert!(out.contains("  2) two"));
        assert_eq!(out.matches("Please enter a number between 1 and 2.").count(), 2);
    }
}
