use crate::domain::spend::MethodSpend;
use crate::error::Result;
use std::io::Write;

/// Writes spend totals as `<method> <amount>` lines.
///
/// There is no header row and amounts always carry two decimals.
pub struct SpendWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SpendWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_spends<'a, I>(&mut self, spends: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a MethodSpend>,
    {
        for spend in spends {
            let amount = spend.amount.to_string();
            self.writer
                .write_record([spend.method_id.as_str(), amount.as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
