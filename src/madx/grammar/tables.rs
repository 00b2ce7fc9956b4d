//! MAD-X name tables
//!
//!     Static lists of the names the grammar recognizes. Command and element entries carry
//!     their aliases and the attribute names accepted inside the statement. Attribute lists
//!     are only used for highlighting: an attribute missing here is not an error, it is just
//!     rendered as plain text.
//!
//!     All names are matched case-insensitively. Entries are regex fragments and are spliced
//!     into alternations verbatim, so a few of them are small patterns rather than literal
//!     names (`k[0-2]s?` covers k0, k0s, k1, k1s, k2 and k2s). They must not contain
//!     capturing groups.

/// A command and the attributes it accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Command name followed by its aliases. The first entry names the generated state.
    pub names: &'static [&'static str],
    pub attributes: &'static [&'static str],
}

/// An element type and the attributes it accepts on top of [COMMON_ELEMENT_ATTRIBUTES]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSpec {
    /// Type name followed by its aliases. The first entry names the generated state.
    pub names: &'static [&'static str],
    pub attributes: &'static [&'static str],
}

impl CommandSpec {
    pub fn state_name(&self) -> String {
        format!("cmd.{}", self.names[0])
    }
}

impl ElementSpec {
    pub fn state_name(&self) -> String {
        format!("elem.{}", self.names[0])
    }
}

pub const MATH_FUNCTIONS: &[&str] = &[
    "sqrt", "exp", "log", "log10", "sin", "cos", "tan", "asin", "acos", "atan", "sinh",
    "cosh", "tanh", "sinc", "abs", "erf", "erfc", "floor", "ceil", "round", "frac", "ranf",
    "gauss", "tgauss",
];

pub const CONSTANTS: &[&str] = &[
    "pi", "twopi", "degrad", "raddeg", "amass", "emass", "nmass", "pmass", "mumass", "clight",
    "qelect", "hbar", "erad", "prad",
];

pub const CONTROL_KEYWORDS: &[&str] = &[
    "if",
    "elseif",
    "else",
    "while",
    "true",
    "false",
    "endsequence",
];

pub const DECLARATION_KEYWORDS: &[&str] = &["real", "const", "int", "shared"];

/// Statements after which nothing in the enclosing block is reachable
pub const STOP_KEYWORDS: &[&str] = &["stop", "exit", "quit", "return"];

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        names: &["option"],
        attributes: &[
            "echo",
            "warn",
            "info",
            "debug",
            "verify",
            "verbose",
            "trace",
            "echomacro",
            "tell",
            "reset",
            "bborbit",
            "sympl",
            "twiss_print",
            "thin_foc",
            "threader",
            "rbarc",
            "no_fatal_stop",
            "keep_exp_move",
        ],
    },
    CommandSpec {
        names: &["set"],
        attributes: &["format", "sequence"],
    },
    CommandSpec {
        names: &["select"],
        attributes: &[
            "flag", "range", "class", "pattern", "sequence", "full", "clear", "column", "slice",
            "thick", "at", "step",
        ],
    },
    CommandSpec {
        names: &["use"],
        attributes: &["sequence", "period", "range", "survey"],
    },
    CommandSpec {
        names: &["system", "title"],
        attributes: &[],
    },
    CommandSpec {
        names: &["assign"],
        attributes: &["echo", "truncate"],
    },
    CommandSpec {
        names: &["call", "removefile"],
        attributes: &["file"],
    },
    CommandSpec {
        names: &["print"],
        attributes: &["text"],
    },
    CommandSpec {
        names: &["printf"],
        attributes: &["text", "value"],
    },
    CommandSpec {
        names: &["renamefile"],
        attributes: &["file", "to"],
    },
    CommandSpec {
        names: &["chdir"],
        attributes: &["dir"],
    },
    CommandSpec {
        names: &["copyfile"],
        attributes: &["file", "to", "append"],
    },
    CommandSpec {
        names: &["create"],
        attributes: &["table", "column"],
    },
    CommandSpec {
        names: &["delete"],
        attributes: &["table", "sequence"],
    },
    CommandSpec {
        names: &["readmytable", "write", "readtable"],
        attributes: &["file", "table", "column", "noline"],
    },
    CommandSpec {
        names: &["fill", "shrink"],
        attributes: &["table", "row", "scale"],
    },
    CommandSpec {
        names: &["setvars"],
        attributes: &["table", "row", "noappend", "clear"],
    },
    CommandSpec {
        names: &["fill_knob"],
        attributes: &["table", "row", "knob", "scale"],
    },
    CommandSpec {
        names: &["setvars_lin"],
        attributes: &["table", "row1", "row2", "param"],
    },
    CommandSpec {
        names: &["beam"],
        attributes: &[
            "particle", "mass", "charge", "energy", "pc", "gamma", "beta", "brho", "exn?",
            "eyn?", "et", "sigt", "sige", "kbunch", "npart", "bcurrent", "bunched", "radiate",
            "bv", "sequence",
        ],
    },
    CommandSpec {
        names: &["resbeam"],
        attributes: &["sequence"],
    },
    CommandSpec {
        names: &["twiss"],
        attributes: &[
            "sequence",
            "line",
            "range",
            "deltap",
            "chrom",
            "centre",
            "tolerance",
            "file",
            "table",
            "notable",
            "rmatrix",
            "sectormap",
            "sectortable",
            "sectorfile",
            "keeporbit",
            "useorbit",
            "ripken",
            "betx",
            "alfx",
            "mux",
            "bety",
            "alfy",
            "muy",
            "dd?p?[xy]",
            "x",
            "px",
            "y",
            "py",
            "t",
            "pt",
            "wx",
            "phix",
            "dmux",
            "wy",
            "phiy",
            "dmuy",
            "r(?:11|12|21|22)",
            "beta0",
        ],
    },
    CommandSpec {
        names: &["survey"],
        attributes: &[
            "x0", "y0", "z0", "theta0", "phi0", "psi0", "file", "table", "sequence", "perm_align",
        ],
    },
    CommandSpec {
        names: &["show", "value"],
        attributes: &[],
    },
    CommandSpec {
        names: &["save"],
        attributes: &["sequence", "file", "beam", "bare", "mad8", "newname"],
    },
    CommandSpec {
        names: &["makethin"],
        attributes: &["sequence", "style", "makedipedge", "makeconsistent", "minimizeparents"],
    },
];

/// Attributes every element accepts
pub const COMMON_ELEMENT_ATTRIBUTES: &[&str] = &[
    "l",
    "at",
    "from",
    "lrad",
    "tilt",
    "bv",
    "apertype",
    "aperture",
    "aper_offset",
    "aper_tol",
    "mech_sep",
    "v_pos",
    "slot_id",
    "assembly_id",
    "kmax",
    "kmin",
    "calib",
    "polarity",
    "type",
];

pub const ELEMENTS: &[ElementSpec] = &[
    ElementSpec {
        names: &["marker"],
        attributes: &[],
    },
    ElementSpec {
        names: &["rbend"],
        attributes: &[
            "angle",
            "k[0-2]s?",
            "e1",
            "e2",
            "fintx?",
            "hgap",
            "h1",
            "h2",
            "thick",
            "add_angle",
            "kill_ent_fringe",
            "kill_exi_fringe",
        ],
    },
    ElementSpec {
        names: &["drift"],
        attributes: &[],
    },
    ElementSpec {
        names: &["sbend"],
        attributes: &[
            "angle",
            "k[0-2]s?",
            "e1",
            "e2",
            "fintx?",
            "hgap",
            "h1",
            "h2",
            "thick",
            "kill_ent_fringe",
            "kill_exi_fringe",
        ],
    },
    ElementSpec {
        names: &["dipedge"],
        attributes: &["h", "e1", "fint", "hgap"],
    },
    ElementSpec {
        names: &["quadrupole"],
        attributes: &["k1s?", "thick"],
    },
    ElementSpec {
        names: &["sextupole"],
        attributes: &["k2s?"],
    },
    ElementSpec {
        names: &["octupole"],
        attributes: &["k3s?"],
    },
    ElementSpec {
        names: &["multipole"],
        attributes: &["knl", "ksl"],
    },
    ElementSpec {
        names: &["solenoid"],
        attributes: &["ks", "ksi"],
    },
    ElementSpec {
        names: &["nllens"],
        attributes: &["knll", "cnll"],
    },
    ElementSpec {
        names: &["kicker", "hkicker", "vkicker", "tkicker"],
        attributes: &["[hv]?kick", "sinkick", "sintune", "sinpeak", "sinphase"],
    },
    ElementSpec {
        names: &["rfcavity", "crabcavity", "twcavity"],
        attributes: &[
            "volt", "lag", "freq", "harmon", "n_bessel", "no_cavity_totalpath", "psi", "delta_lag",
        ],
    },
    ElementSpec {
        names: &["monitor", "hmonitor", "vmonitor", "instrument", "placeholder"],
        attributes: &[],
    },
    ElementSpec {
        names: &["collimator", "ecollimator", "rcollimator"],
        attributes: &["xsize", "ysize"],
    },
    ElementSpec {
        names: &["beambeam"],
        attributes: &["sigx", "sigy", "xma", "yma", "charge", "bbshape", "width", "bbdir"],
    },
    ElementSpec {
        names: &["matrix"],
        attributes: &["kick[1-6]", "rm[1-6][1-6]", "tm[1-6][1-6][1-6]"],
    },
    ElementSpec {
        names: &["srotation", "xrotation", "yrotation"],
        attributes: &["angle"],
    },
    ElementSpec {
        names: &["translation"],
        attributes: &["dx", "dy", "ds"],
    },
    ElementSpec {
        names: &["sequence"],
        attributes: &["refer", "refpos", "add_pass", "next_sequ"],
    },
];

/// Sub-commands of a sequence edit block
pub const SEQEDIT_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        names: &["flatten"],
        attributes: &[],
    },
    CommandSpec {
        names: &["reflect"],
        attributes: &[],
    },
    CommandSpec {
        names: &["cycle"],
        attributes: &["start"],
    },
    CommandSpec {
        names: &["install"],
        attributes: &["element", "class", "at", "from", "selected"],
    },
    CommandSpec {
        names: &["move"],
        attributes: &["element", "by", "to", "from"],
    },
    CommandSpec {
        names: &["remove"],
        attributes: &["element", "selected"],
    },
    CommandSpec {
        names: &["replace"],
        attributes: &["element", "by", "selected"],
    },
    CommandSpec {
        names: &["extract"],
        attributes: &["sequence", "from", "to", "newname"],
    },
];
