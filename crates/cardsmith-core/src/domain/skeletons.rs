//! Built-in card source skeletons.
//!
//! Placeholders use `{{TOKEN}}` syntax and are resolved by
//! [`render_template`](crate::domain::render_template).

/// Plain UnboundLib `CustomCard`.
///
/// Uses a file-scoped namespace so the class owns the final closing brace.
pub const VANILLA: &str = r#"using System;
using UnityEngine;
using UnboundLib;
using UnboundLib.Cards;

namespace {{MODNAME}}.Cards;

class {{NAME}} : CustomCard
{
    public override void SetupCard(CardInfo cardInfo, Gun gun, ApplyCardStats cardStats, CharacterStatModifiers statModifiers, Block block)
    {
        // [STATS HERE]

        UnityEngine.Debug.Log("[{{NAME}}] Setup Completed");
    }

    public override void OnAddCard(Player player, Gun gun, GunAmmo gunAmmo, CharacterData data, HealthHandler health, Gravity gravity, Block block, CharacterStatModifiers characterStats)
    {
        // [PASSIVES HERE]
    }

    public override void OnRemoveCard(Player player, Gun gun, GunAmmo gunAmmo, CharacterData data, HealthHandler health, Gravity gravity, Block block, CharacterStatModifiers characterStats) { }

    protected override string GetTitle() { return "{{NAME}}"; }
    protected override string GetDescription() { return "{{DESC}}"; }
    protected override GameObject GetCardArt() { return null; }
    protected override CardInfo.Rarity GetRarity() { return CardInfo.Rarity.{{RARITY}}; }
    protected override CardThemeColor.CardThemeColorType GetTheme() { return CardThemeColor.CardThemeColorType.{{THEME}}; }
    public override string GetModName() { return "{{MODNAME}}"; }
}
"#;

/// ModsPlus `SimpleCard` with a `CardDetails` initializer.
pub const MODS_PLUS: &str = r#"using System;
using System.Collections.Generic;
using UnityEngine;
using ModsPlus;
using RarityLib.Utils;

public class {{NAME}} : SimpleCard
{
    public override CardDetails Details => new CardDetails
    {
        Title       = "{{NAME}}",
        Description = "{{DESC}}",
        ModName     = "{{MODNAME}}",
        Rarity      = RarityUtils.GetRarity("{{RARITY}}"),
        Theme       = CardThemeColor.CardThemeColorType.{{THEME}},
        Art         = null
    };

    public override void SetupCard(CardInfo cardInfo, Gun gun, ApplyCardStats cardStats, CharacterStatModifiers statModifiers, Block block)
    {
        Dictionary<string, Action<float>> actions = new Dictionary<string, Action<float>>
        {
            { "damage", (val) => { gun.damage = val; } },
            { "health", (val) => { statModifiers.health = val; } },
        };
    }
}
"#;
