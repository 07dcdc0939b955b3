// Generated by `casts-l10n generate` from Localizable.strings. Do not edit.

crate::localizable! {
    /// About
    about = "About";
    /// Change Email Address
    account_change_email = "Change Email Address";
    /// Change Password
    account_change_password = "Change Password";
    /// Create Account
    account_create = "Create Account";
    /// Are you sure you want to delete the account for %1$@?
    account_delete_confirmation(p1) = "Are you sure you want to delete the account for %1$@?";
    /// Email Address
    account_email_address = "Email Address";
    /// Forgot Password?
    account_forgot_password = "Forgot Password?";
    /// Log In
    account_login = "Log In";
    /// Sign Out
    account_logout = "Sign Out";
    /// We sent a password reset link to %1$@.
    account_password_reset_sent(p1) = "We sent a password reset link to %1$@.";
    /// Signed in as %1$@
    account_signed_in_as(p1) = "Signed in as %1$@";
    /// Acknowledgements
    acknowledgements = "Acknowledgements";
    /// Add to Up Next
    add_to_up_next = "Add to Up Next";
    /// Pocket Casts
    app_name = "Pocket Casts";
    /// Version %1$@ (%2$@)
    app_version(p1, p2) = "Version %1$@ (%2$@)";
    /// Archive
    archive = "Archive";
    /// %1$@ archived
    archived_episodes_count(p1) = "%1$@ archived";
    /// Cancel
    cancel = "Cancel";
    /// %1$@ days
    days_plural_format(p1) = "%1$@ days";
    /// Delete
    delete = "Delete";
    /// Discover
    discover = "Discover";
    /// Done
    done = "Done";
    /// Download
    download = "Download";
    /// Clean Up
    download_clean_up = "Clean Up";
    /// Download Failed
    download_failed = "Download Failed";
    /// Downloading %1$@%%
    download_progress_format(p1) = "Downloading %1$@%%";
    /// Queued
    download_queued = "Queued";
    /// %1$@ used of %2$@
    download_storage_used(p1, p2) = "%1$@ used of %2$@";
    /// Only on Wi-Fi
    download_wifi_only = "Only on Wi-Fi";
    /// Downloads
    downloads = "Downloads";
    /// Edit
    edit = "Edit";
    /// Episode
    episode = "Episode";
    /// Bonus
    episode_bonus = "Bonus";
    /// %1$@ episodes
    episode_count_plural_format(p1) = "%1$@ episodes";
    /// 1 episode
    episode_count_singular = "1 episode";
    /// Episode Details
    episode_details = "Episode Details";
    /// %1$@ MB
    episode_file_size(p1) = "%1$@ MB";
    /// In Progress
    episode_in_progress = "In Progress";
    /// Played
    episode_played = "Played";
    /// Published %1$@
    episode_published_date(p1) = "Published %1$@";
    /// Episode %1$@
    episode_shorthand_format(p1) = "Episode %1$@";
    /// EP %1$@
    episode_shorthand_format_short(p1) = "EP %1$@";
    /// Show Notes
    episode_show_notes = "Show Notes";
    /// Trailer
    episode_trailer = "Trailer";
    /// Episodes
    episodes = "Episodes";
    /// %1$@ of %2$@ selected
    episodes_selected_format(p1, p2) = "%1$@ of %2$@ selected";
    /// Unable to download %1$@: %2$@
    error_episode_download(p1, p2) = "Unable to download %1$@: %2$@";
    /// Something went wrong
    error_general_title = "Something went wrong";
    /// You appear to be offline. Check your connection and try again.
    error_network_offline = "You appear to be offline. Check your connection and try again.";
    /// We couldn't find %1$@.
    error_podcast_not_found(p1) = "We couldn't find %1$@.";
    /// All Episodes
    filter_all_episodes = "All Episodes";
    /// Downloaded
    filter_downloaded = "Downloaded";
    /// Between %1$@ and %2$@ minutes
    filter_duration_between_format(p1, p2) = "Between %1$@ and %2$@ minutes";
    /// New Filter
    filter_new = "New Filter";
    /// Released in the last %1$@
    filter_release_date_last_format(p1) = "Released in the last %1$@";
    /// Starred
    filter_starred = "Starred";
    /// Unplayed
    filter_unplayed = "Unplayed";
    /// Filters
    filters = "Filters";
    /// Hide Archived
    hide_archived = "Hide Archived";
    /// %1$@h %2$@m
    hours_minutes_format(p1, p2) = "%1$@h %2$@m";
    /// %1$@ hours
    hours_plural_format(p1) = "%1$@ hours";
    /// 1 hour
    hours_singular = "1 hour";
    /// Mark as Played
    mark_played = "Mark as Played";
    /// Mark as Unplayed
    mark_unplayed = "Mark as Unplayed";
    /// %1$@ minutes
    minutes_plural_format(p1) = "%1$@ minutes";
    /// 1 minute
    minutes_singular = "1 minute";
    /// OK
    ok = "OK";
    /// Play Last
    play_last = "Play Last";
    /// Play Next
    play_next = "Play Next";
    /// AirPlay
    player_airplay = "AirPlay";
    /// %1$@ of %2$@
    player_chapter_count_format(p1, p2) = "%1$@ of %2$@";
    /// Chapters
    player_chapters = "Chapters";
    /// Chromecast
    player_chromecast = "Chromecast";
    /// Now Playing
    player_now_playing = "Now Playing";
    /// Playback Speed
    player_playback_speed = "Playback Speed";
    /// Skip back %1$@ seconds
    player_skip_back_format(p1) = "Skip back %1$@ seconds";
    /// Skip forward %1$@ seconds
    player_skip_forward_format(p1) = "Skip forward %1$@ seconds";
    /// Sleeping in %1$@ minutes
    player_sleep_in_minutes(p1) = "Sleeping in %1$@ minutes";
    /// Sleep Timer
    player_sleep_timer = "Sleep Timer";
    /// End of Episode
    player_sleep_timer_end_of_episode = "End of Episode";
    /// %1$@x
    player_speed_format(p1) = "%1$@x";
    /// Trim Silence
    player_trim_silence = "Trim Silence";
    /// Volume Boost
    player_volume_boost = "Volume Boost";
    /// %1$@ GB cloud storage
    plus_cloud_storage_limit(p1) = "%1$@ GB cloud storage";
    /// Save %1$@%%
    plus_discount_percent_format(p1) = "Save %1$@%%";
    /// Plus Features
    plus_features = "Plus Features";
    /// Try %1$@ free
    plus_free_trial_format(p1) = "Try %1$@ free";
    /// 50%% off
    plus_offer_badge = "50%% off";
    /// %1$@ / month
    plus_price_per_month(p1) = "%1$@ / month";
    /// %1$@ / year
    plus_price_per_year(p1) = "%1$@ / year";
    /// Your subscription expires on %1$@
    plus_subscription_expires(p1) = "Your subscription expires on %1$@";
    /// Upgrade to Plus
    plus_upgrade = "Upgrade to Plus";
    /// Pocket Casts Plus
    pocket_casts_plus = "Pocket Casts Plus";
    /// Auto Download
    podcast_auto_download = "Auto Download";
    /// %1$@ by %2$@
    podcast_by_author_format(p1, p2) = "%1$@ by %2$@";
    /// %1$@ podcasts
    podcast_count_format(p1) = "%1$@ podcasts";
    /// Create Folder
    podcast_folder_create = "Create Folder";
    /// Folder Name
    podcast_folder_name = "Folder Name";
    /// %1$@ podcasts in %2$@
    podcast_folder_podcast_count(p1, p2) = "%1$@ podcasts in %2$@";
    /// Grid Layout
    podcast_grid_layout = "Grid Layout";
    /// List Layout
    podcast_list_layout = "List Layout";
    /// Notifications
    podcast_notifications = "Notifications";
    /// Podcast Settings
    podcast_settings = "Podcast Settings";
    /// Shared by %1$@ on %2$@
    podcast_shared_by(p1, p2) = "Shared by %1$@ on %2$@";
    /// Skip first %1$@ seconds
    podcast_skip_first_format(p1) = "Skip first %1$@ seconds";
    /// Skip last %1$@ seconds
    podcast_skip_last_format(p1) = "Skip last %1$@ seconds";
    /// Date Added
    podcast_sort_by_date_added = "Date Added";
    /// Name
    podcast_sort_by_name = "Name";
    /// Release Date
    podcast_sort_by_release_date = "Release Date";
    /// Subscribed
    podcast_subscribed = "Subscribed";
    /// Podcasts
    podcasts = "Podcasts";
    /// Privacy Policy
    privacy_policy = "Privacy Policy";
    /// Profile
    profile = "Profile";
    /// Rate Pocket Casts
    rate_us = "Rate Pocket Casts";
    /// Refresh Now
    refresh_now = "Refresh Now";
    /// Remove Download
    remove_download = "Remove Download";
    /// Remove from Up Next
    remove_from_up_next = "Remove from Up Next";
    /// Retry
    retry = "Retry";
    /// Save
    save = "Save";
    /// Search
    search = "Search";
    /// Search Podcasts
    search_podcasts = "Search Podcasts";
    /// Results for "%1$@"
    search_results_for(p1) = "Results for \"%1$@\"";
    /// S%1$@ E%2$@
    season_episode_shorthand_format(p1, p2) = "S%1$@ E%2$@";
    /// S%1$@ EP%2$@
    season_episode_shorthand_format_short(p1, p2) = "S%1$@ EP%2$@";
    /// Season %1$@
    season_only_shorthand_format(p1) = "Season %1$@";
    /// %1$@ seconds
    seconds_plural_format(p1) = "%1$@ seconds";
    /// Settings
    settings = "Settings";
    /// Appearance
    settings_appearance = "Appearance";
    /// Archive after %1$@ days
    settings_archive_after_format(p1) = "Archive after %1$@ days";
    /// Auto Archive
    settings_auto_archive = "Auto Archive";
    /// Export OPML
    settings_export_opml = "Export OPML";
    /// Headphone Controls
    settings_headphone_controls = "Headphone Controls";
    /// Import OPML
    settings_import_opml = "Import OPML";
    /// Imported %1$@ of %2$@ podcasts
    settings_opml_import_result(p1, p2) = "Imported %1$@ of %2$@ podcasts";
    /// Storage & Data Use
    settings_storage = "Storage & Data Use";
    /// Theme
    settings_theme = "Theme";
    /// Share
    share = "Share";
    /// Share Pocket Casts
    share_pocket_casts = "Share Pocket Casts";
    /// Show Archived
    show_archived = "Show Archived";
    /// Star Episode
    star_episode = "Star Episode";
    /// Listening History
    stats_listening_history = "Listening History";
    /// Since %1$@
    stats_since_date(p1) = "Since %1$@";
    /// Your top %1$@ podcasts of %2$@
    stats_top_podcasts(p1, p2) = "Your top %1$@ podcasts of %2$@";
    /// Total listening time
    stats_total_listening = "Total listening time";
    /// Subscribe
    subscribe = "Subscribe";
    /// Sync Failed
    sync_failed = "Sync Failed";
    /// Syncing...
    sync_in_progress = "Syncing...";
    /// Last synced %1$@
    sync_last_synced(p1) = "Last synced %1$@";
    /// Terms of Use
    terms_of_use = "Terms of Use";
    /// %1$@ left
    time_left_format(p1) = "%1$@ left";
    /// You've listened for %1$@
    time_listened_format(p1) = "You've listened for %1$@";
    /// Saved %1$@ by skipping and speeding up
    time_saved_format(p1) = "Saved %1$@ by skipping and speeding up";
    /// Today
    today = "Today";
    /// Unarchive
    unarchive = "Unarchive";
    /// Unstar Episode
    unstar_episode = "Unstar Episode";
    /// Unsubscribe
    unsubscribe = "Unsubscribe";
    /// Unsubscribe from %1$@?
    unsubscribe_confirmation(p1) = "Unsubscribe from %1$@?";
    /// Up Next
    up_next = "Up Next";
    /// Clear Up Next
    up_next_clear = "Clear Up Next";
    /// Clear %1$@ episodes from Up Next?
    up_next_clear_confirmation(p1) = "Clear %1$@ episodes from Up Next?";
    /// Nothing in Up Next
    up_next_empty = "Nothing in Up Next";
    /// %1$@ episodes, %2$@ remaining
    up_next_total_time(p1, p2) = "%1$@ episodes, %2$@ remaining";
    /// Yesterday
    yesterday = "Yesterday";
}
