//! Typed field selection

/// A serializable field of one entity kind.
pub trait Field: Copy + Eq + 'static {
    /// Every field, in output order
    const ALL: &'static [Self];
    /// Fields emitted when the caller does not override the selection
    const DEFAULT: &'static [Self];

    /// JSON key
    fn name(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroField {
    Id,
    Name,
    SuperName,
    HeroPowers,
}

impl Field for HeroField {
    const ALL: &'static [Self] = &[
        HeroField::Id,
        HeroField::Name,
        HeroField::SuperName,
        HeroField::HeroPowers,
    ];
    const DEFAULT: &'static [Self] = &[HeroField::Id, HeroField::Name, HeroField::SuperName];

    fn name(self) -> &'static str {
        match self {
            HeroField::Id => "id",
            HeroField::Name => "name",
            HeroField::SuperName => "super_name",
            HeroField::HeroPowers => "hero_powers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerField {
    Id,
    Name,
    Description,
    HeroPowers,
}

impl Field for PowerField {
    const ALL: &'static [Self] = &[
        PowerField::Id,
        PowerField::Name,
        PowerField::Description,
        PowerField::HeroPowers,
    ];
    const DEFAULT: &'static [Self] = &[PowerField::Id, PowerField::Name, PowerField::Description];

    fn name(self) -> &'static str {
        match self {
            PowerField::Id => "id",
            PowerField::Name => "name",
            PowerField::Description => "description",
            PowerField::HeroPowers => "hero_powers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroPowerField {
    Id,
    Strength,
    HeroId,
    PowerId,
    Hero,
    Power,
}

impl Field for HeroPowerField {
    const ALL: &'static [Self] = &[
        HeroPowerField::Id,
        HeroPowerField::Strength,
        HeroPowerField::HeroId,
        HeroPowerField::PowerId,
        HeroPowerField::Hero,
        HeroPowerField::Power,
    ];
    const DEFAULT: &'static [Self] = &[
        HeroPowerField::Id,
        HeroPowerField::Strength,
        HeroPowerField::HeroId,
        HeroPowerField::PowerId,
    ];

    fn name(self) -> &'static str {
        match self {
            HeroPowerField::Id => "id",
            HeroPowerField::Strength => "strength",
            HeroPowerField::HeroId => "hero_id",
            HeroPowerField::PowerId => "power_id",
            HeroPowerField::Hero => "hero",
            HeroPowerField::Power => "power",
        }
    }
}

/// The set of fields to emit for one serialization call.
///
/// Starts from an allow-list (`only`) or the kind's defaults and can be
/// adjusted with `with` / `without`. Iteration follows [`Field::ALL`]
/// regardless of how the set was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet<F: Field> {
    fields: Vec<F>,
}

impl<F: Field> FieldSet<F> {
    /// The kind's default fields (relations excluded)
    pub fn defaults() -> Self {
        Self::only(F::DEFAULT)
    }

    /// Exactly the listed fields
    pub fn only(fields: &[F]) -> Self {
        let mut set = Self { fields: Vec::new() };
        for field in fields {
            set = set.with(*field);
        }
        set
    }

    /// Every field, relations included
    pub fn all() -> Self {
        Self::only(F::ALL)
    }

    pub fn with(mut self, field: F) -> Self {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
        self
    }

    pub fn without(mut self, field: F) -> Self {
        self.fields.retain(|f| *f != field);
        self
    }

    pub fn contains(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        F::ALL.iter().copied().filter(|f| self.fields.contains(f))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<F: Field> Default for FieldSet<F> {
    fn default() -> Self {
        Self::defaults()
    }
}
