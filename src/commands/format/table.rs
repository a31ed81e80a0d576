//! Ranked table rendering shared by `show` and `board`

use juryboard_core::chart::{label_width, pad_label};
use juryboard_core::ranking::Standing;
use juryboard_core::records::escape_quotes;

/// Print the ranked table: rank, team, one column per criterion, total
pub fn print_ranked_table(criteria: &[String], standings: &[Standing]) {
    let team_width = label_width(standings.iter().map(|s| s.team.as_str())).max(4);
    let col_widths: Vec<usize> = criteria.iter().map(|c| c.chars().count().max(1)).collect();

    let mut header = format!("{:>4}  {}", "#", pad_label("Team", team_width));
    for (criterion, width) in criteria.iter().zip(&col_widths) {
        header.push_str(&format!("  {}", pad_label(criterion, *width)));
    }
    header.push_str("  Total");
    println!("{}", header);

    for row in standings {
        let mut line = format!("{:>4}  {}", row.rank, pad_label(&row.team, team_width));
        for (score, width) in row.scores.iter().zip(&col_widths) {
            line.push_str(&format!("  {:>width$}", score, width = *width));
        }
        line.push_str(&format!("  {:>5}", row.total));
        println!("{}", line);
    }
}

/// Print one records line per standing
pub fn print_standing_records(standings: &[Standing]) {
    for row in standings {
        let scores = row
            .scores
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "T rank={} team=\"{}\" total={} scores={}",
            row.rank,
            escape_quotes(&row.team),
            row.total,
            scores
        );
    }
}
