mod mirrorfield;
