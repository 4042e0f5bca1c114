/// Formate une taille de buffer en octets de façon lisible (B, KB, MB, GB).
pub fn human_bytes(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let size = bytes as f64;
    match size {
        s if s >= GB => format!("{:.2} GB", s / GB),
        s if s >= MB => format!("{:.2} MB", s / MB),
        s if s >= KB => format!("{:.2} KB", s / KB),
        _ => format!("{} B", bytes),
    }
}
