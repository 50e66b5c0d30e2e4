use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::error::{Result, SignError};

/// Longest single label, in octets (RFC 1035 §2.3.4)
pub const MAX_LABEL_LEN: usize = 63;
/// Longest encoded name, in octets (RFC 1035 §2.3.4)
pub const MAX_NAME_LEN: usize = 255;

pub type WireWriter<'a> = BitWriter<&'a mut Vec<u8>, BigEndian>;

/// Anything that can emit itself in uncompressed wire format.
pub trait WireComponent {
    fn write(&self, writer: &mut WireWriter<'_>) -> Result<()>;

    fn to_wire(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut writer = WireWriter::new(&mut buf);
            self.write(&mut writer)?;
        }
        Ok(buf)
    }
}

/// Split a presentation-format name into labels, dropping the root label.
pub fn split_labels(name: &str) -> Vec<String> {
    name.split('.')
        .filter(|label| !label.is_empty())
        .map(|label| label.to_string())
        .collect()
}

/// Fully-qualified presentation form, always ending in a dot.
pub fn fqdn(labels: &[String]) -> String {
    if labels.is_empty() {
        return ".".to_string();
    }
    let mut name = labels.join(".");
    name.push('.');
    name
}

/// Write an uncompressed name, optionally lowercased for canonical form.
pub fn write_name(writer: &mut WireWriter<'_>, labels: &[String], lowercase: bool) -> Result<()> {
    let encoded_len: usize = labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1;
    if encoded_len > MAX_NAME_LEN {
        return Err(SignError::Encoding(format!(
            "name {} is {} octets long",
            fqdn(labels),
            encoded_len
        )));
    }

    for label in labels {
        if label.len() > MAX_LABEL_LEN {
            return Err(SignError::Encoding(format!("label too long: {}", label)));
        }
        writer.write_var::<u8>(8, label.len() as u8)?;
        if lowercase {
            writer.write_bytes(label.to_ascii_lowercase().as_bytes())?;
        } else {
            writer.write_bytes(label.as_bytes())?;
        }
    }
    writer.write_var::<u8>(8, 0)?;
    Ok(())
}

pub fn name_to_wire(labels: &[String], lowercase: bool) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = WireWriter::new(&mut buf);
        write_name(&mut writer, labels, lowercase)?;
    }
    Ok(buf)
}
