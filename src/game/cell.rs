/// Kind of collectable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Red,
    Green,
    Blue,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Red, ItemKind::Green, ItemKind::Blue];

    /// Score awarded when the item is collected
    pub fn points(&self) -> u32 {
        match self {
            ItemKind::Red => 100,
            ItemKind::Green => 50,
            ItemKind::Blue => 10,
        }
    }

    /// Energy granted on collection (only blue items recharge)
    pub fn energy_bonus(&self) -> i32 {
        match self {
            ItemKind::Blue => 5,
            ItemKind::Red | ItemKind::Green => 0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ItemKind::Red => "JR",
            ItemKind::Green => "JG",
            ItemKind::Blue => "JB",
        }
    }
}

/// Kind of obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Water,
    Tree,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 2] = [ObstacleKind::Water, ObstacleKind::Tree];

    /// Energy the agent draws from this obstacle on every interaction
    pub fn energy_yield(&self) -> i32 {
        match self {
            ObstacleKind::Water => 0,
            ObstacleKind::Tree => 3,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ObstacleKind::Water => "##",
            ObstacleKind::Tree => "$$",
        }
    }
}

/// Contents of a single grid coordinate
///
/// Exactly one variant occupies each coordinate; there is no layering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Item(ItemKind),
    Obstacle(ObstacleKind),
    Radioactive,
    Agent,
}

impl Cell {
    /// Two-character display code
    pub fn symbol(&self) -> &'static str {
        match self {
            Cell::Empty => "--",
            Cell::Item(kind) => kind.symbol(),
            Cell::Obstacle(kind) => kind.symbol(),
            Cell::Radioactive => "!!",
            Cell::Agent => "ME",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_item(&self) -> bool {
        matches!(self, Cell::Item(_))
    }

    pub fn is_radioactive(&self) -> bool {
        matches!(self, Cell::Radioactive)
    }

    /// Points carried by the cell, zero for anything that is not an item
    pub fn points(&self) -> u32 {
        match self {
            Cell::Item(kind) => kind.points(),
            _ => 0,
        }
    }

    /// Energy yield carried by the cell, zero for anything that is not an obstacle
    pub fn energy_yield(&self) -> i32 {
        match self {
            Cell::Obstacle(kind) => kind.energy_yield(),
            _ => 0,
        }
    }
}

impl From<ItemKind> for Cell {
    fn from(kind: ItemKind) -> Self {
        Cell::Item(kind)
    }
}

impl From<ObstacleKind> for Cell {
    fn from(kind: ObstacleKind) -> Self {
        Cell::Obstacle(kind)
    }
}
