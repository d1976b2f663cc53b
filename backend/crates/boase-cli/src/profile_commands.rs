use boase_core::ProfileUpdate;

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show your profile
    Show,
    /// Update profile fields (only the given flags are changed)
    Update(UpdateProfileArgs),
    /// Hide the welcome card
    DismissWelcome,
}

#[derive(Args, Debug, Default)]
pub struct UpdateProfileArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub display_name: Option<String>,
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub avatar_url: Option<String>,
    #[arg(long)]
    pub website_url: Option<String>,
    #[arg(long)]
    pub twitter_url: Option<String>,
    #[arg(long)]
    pub linkedin_url: Option<String>,
    #[arg(long)]
    pub github_url: Option<String>,
    #[arg(long)]
    pub instagram_url: Option<String>,
    #[arg(long)]
    pub discord_url: Option<String>,
    #[arg(long)]
    pub phone_whatsapp: Option<String>,
    #[arg(long)]
    pub tiktok_url: Option<String>,
    #[arg(long)]
    pub telegram_url: Option<String>,
    #[arg(long)]
    pub facebook_url: Option<String>,
    /// Ticker-style handle, e.g. "$ALICE"
    #[arg(long)]
    pub dollar_handle: Option<String>,
    #[arg(long)]
    pub token_name: Option<String>,
    #[arg(long)]
    pub supply: Option<String>,
}

impl From<UpdateProfileArgs> for ProfileUpdate {
    fn from(args: UpdateProfileArgs) -> Self {
        ProfileUpdate {
            username: args.username,
            display_name: args.display_name,
            full_name: args.full_name,
            bio: args.bio,
            avatar_url: args.avatar_url,
            website_url: args.website_url,
            twitter_url: args.twitter_url,
            linkedin_url: args.linkedin_url,
            github_url: args.github_url,
            instagram_url: args.instagram_url,
            discord_url: args.discord_url,
            phone_whatsapp: args.phone_whatsapp,
            tiktok_url: args.tiktok_url,
            telegram_url: args.telegram_url,
            facebook_url: args.facebook_url,
            dollar_handle: args.dollar_handle,
            token_name: args.token_name,
            supply: args.supply,
            has_seen_welcome_card: None,
        }
    }
}
