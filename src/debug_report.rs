use riddlepass::{Board, Card, Evaluation, Session};

/// What a piece of output means; each tone maps to one SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Pass,
    Fail,
    Trap,
    Context,
    Asset,
    Heading,
    Rule,
}

impl Tone {
    fn sgr(self) -> &'static str {
        match self {
            Tone::Pass => "32",
            Tone::Fail => "31",
            Tone::Trap => "35",
            Tone::Context => "33",
            Tone::Asset => "34",
            Tone::Heading => "36",
            Tone::Rule => "90",
        }
    }
}

pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn wrap(&self, codes: &str, s: impl AsRef<str>) -> String {
        if self.enabled { format!("\x1b[{codes}m{}\x1b[0m", s.as_ref()) } else { s.as_ref().to_string() }
    }

    pub fn paint(&self, s: impl AsRef<str>, tone: Tone) -> String {
        self.wrap(tone.sgr(), s)
    }

    /// Bold and colored in one escape sequence.
    pub fn strong(&self, s: impl AsRef<str>, tone: Tone) -> String {
        self.wrap(&format!("1;{}", tone.sgr()), s)
    }

    pub fn muted(&self, s: impl AsRef<str>) -> String {
        self.wrap("2", s)
    }
}

pub fn print_header(session: &Session, palette: &Palette) {
    let level = session.level();
    println!(
        "\n{}",
        palette.strong(format!("⚙  Level {}: {}", level.id(), level.title()), Tone::Heading)
    );
    println!("  {}", palette.muted(level.description()));

    let ctx = session.context();
    let field = |value: Option<u32>| value.map_or_else(|| "-".to_string(), |v| format!("{v:02}"));
    println!(
        "  {} {}  │  {} {}  │  {} {}",
        palette.muted("hour:"),
        palette.paint(field(ctx.hour), Tone::Context),
        palette.muted("minute:"),
        palette.paint(field(ctx.minute), Tone::Context),
        palette.muted("target:"),
        palette.paint(field(ctx.target_number), Tone::Context),
    );
    if let Some(item) = level.protected_item() {
        println!("  {} {}", palette.muted("protect:"), item);
    }
}

pub fn print_board(candidate: &str, board: &Board<'_>, palette: &Palette) {
    println!("\n{}", palette.paint(format!("━━━ \"{candidate}\" ━━━"), Tone::Rule));

    for card in &board.cards {
        match card {
            Card::Failure => println!("  {}", palette.strong("💀 Protected item lost. Restart the level.", Tone::Fail)),
            Card::Complete => println!("  {}", palette.strong("★ All rules hold. Generate the password.", Tone::Pass)),
            Card::Rule(result) => print_rule(result, palette),
        }
    }

    let unlocked: Vec<String> = board.unlocked.iter().map(usize::to_string).collect();
    println!("  {} {}", palette.muted("unlocked:"), palette.muted(unlocked.join(",")));
}

fn print_rule(result: &Evaluation<'_>, palette: &Palette) {
    let mark = if result.ok { palette.paint("✓", Tone::Pass) } else { palette.paint("✗", Tone::Fail) };
    let order = palette.paint(format!("[{}]", result.order), if result.conditional { Tone::Trap } else { Tone::Rule });
    println!("  {} {} {}", order, mark, result.message);

    if let Some(puzzle) = result.rule.puzzle_payload() {
        println!("      {} {}", palette.muted("image:"), palette.paint(puzzle.image().path(), Tone::Asset));
    }
    if let Some(hint) = result.rule.copy_hint() {
        println!("      {} {}", palette.muted("copy:"), palette.paint(hint, Tone::Asset));
    }
}

pub fn print_password(password: &str, palette: &Palette) {
    println!("\n{} {}", palette.paint("🔑 Password:", Tone::Pass), palette.strong(password, Tone::Pass));
}

pub fn print_rejected(reason: &str, palette: &Palette) {
    println!("  {}", palette.paint(format!("rejected: {reason}"), Tone::Context));
}

pub fn print_note(note: &str, palette: &Palette) {
    println!("\n{}", palette.paint(format!("━━━ {note} ━━━"), Tone::Rule));
}
