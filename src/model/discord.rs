use serenity::all::{GuildId, Member, Role, RoleId, UserId};

/// A guild role as seen at lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRole {
    pub id: RoleId,
    pub name: String,
}

impl From<&Role> for GuildRole {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
        }
    }
}

/// A member join gateway event reduced to what the join services need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub username: String,
}

impl From<&Member> for NewMember {
    fn from(member: &Member) -> Self {
        Self {
            guild_id: member.guild_id,
            user_id: member.user.id,
            username: member.user.name.clone(),
        }
    }
}
